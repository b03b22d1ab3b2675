//! Built-in marketplace catalog

use shared::models::{MarketplaceContact, MarketplaceList};

fn contact(name: &str, email: &str, kind: &str, location: &str) -> MarketplaceContact {
    MarketplaceContact {
        name: name.into(),
        email: email.into(),
        kind: kind.into(),
        location: location.into(),
    }
}

fn list(
    id: &str,
    title: &str,
    description: &str,
    seller: &str,
    price: &str,
    tags: &[&str],
    sponsors: Vec<MarketplaceContact>,
) -> MarketplaceList {
    MarketplaceList {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        seller: seller.into(),
        price: price.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        sponsors,
    }
}

/// Catalog served by `GET /api/marketplace` unless `SEED_CATALOG=false`
pub fn default_catalog() -> Vec<MarketplaceList> {
    vec![
        list(
            "1",
            "Hackathon Tech Sponsors",
            "Curated list of tech companies that actively sponsor hackathons and coding events",
            "TechEvent Pro",
            "₹2,500",
            &["Tech", "Hackathon", "Startups"],
            vec![
                contact("DevStack Labs", "partnerships@devstacklabs.in", "Technology", "Bengaluru"),
                contact("CloudNine Systems", "events@cloudnine.io", "Cloud", "Hyderabad"),
                contact("ByteForge", "sponsor@byteforge.dev", "Developer Tools", "Pune"),
            ],
        ),
        list(
            "2",
            "College Fest Corporate Sponsors",
            "Corporate brands with a history of sponsoring cultural and technical college festivals",
            "EventMaster",
            "₹3,200",
            &["Corporate", "College", "Cultural"],
            vec![
                contact("Zenith Beverages", "marketing@zenithbev.com", "FMCG", "Mumbai"),
                contact("Aurora Apparel", "brand@auroraapparel.in", "Retail", "Delhi"),
                contact("Skyline Telecom", "csr@skylinetel.com", "Telecom", "Gurugram"),
            ],
        ),
        list(
            "3",
            "Sports Event Sponsors Database",
            "Sports brands and local businesses that back tournaments and athletic meets",
            "SportsBiz",
            "₹1,800",
            &["Sports", "Tournament", "Athletics"],
            vec![
                contact("Stride Sportswear", "sponsorships@stride.in", "Sportswear", "Chennai"),
                contact("PowerFuel Nutrition", "events@powerfuel.co", "Nutrition", "Ahmedabad"),
            ],
        ),
        list(
            "4",
            "Startup Community Sponsors",
            "Early-stage startups and incubators looking for visibility with student communities",
            "StartupConnect",
            "Free",
            &["Startup", "Tech", "Innovation"],
            vec![
                contact("LaunchPad Incubator", "hello@launchpad.vc", "Incubator", "Bengaluru"),
                contact("Quill AI", "team@quill.ai", "Startup", "Kochi"),
            ],
        ),
        list(
            "5",
            "Educational Institution Partners",
            "EdTech firms and publishers that partner with academic and research events",
            "EduPartners",
            "₹1,500",
            &["Education", "Academic", "Research"],
            vec![
                contact("BrightPath Learning", "partners@brightpath.edu.in", "EdTech", "Noida"),
                contact("Scholar Press", "outreach@scholarpress.in", "Publishing", "Kolkata"),
            ],
        ),
        list(
            "6",
            "Local Business Sponsors",
            "Neighbourhood businesses interested in supporting community and regional events",
            "LocalBiz Hub",
            "₹900",
            &["Local", "Community", "Regional"],
            vec![
                contact("Chai Point Corner", "owner@chaipointcorner.in", "Food & Beverage", "Jaipur"),
                contact("GreenLeaf Stationers", "sales@greenleaf.in", "Retail", "Indore"),
            ],
        ),
    ]
}
