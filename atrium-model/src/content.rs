//! Page content for the showcase, expressed as data.
//!
//! Views render from these tables; the preload manifests in
//! [`page_assets`] are derived from the same tables so a page never
//! references an asset its readiness gate does not track.

use crate::asset::{AssetDescriptor, AssetId};
use crate::route::Route;

/// One carousel entry: the backing asset plus its caption overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub path: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

impl Slide {
    pub fn asset_id(&self) -> AssetId {
        AssetId::new(self.path)
    }

    pub fn descriptor(&self) -> AssetDescriptor {
        AssetDescriptor::image(self.path)
    }
}

/// A headed block of copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

/// An entry in the values / process listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueItem {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Contact page details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCard {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub map_path: &'static str,
}

impl ContactCard {
    pub fn map_asset(&self) -> AssetDescriptor {
        AssetDescriptor::image(self.map_path)
    }
}

/// Hero rotation on the home page.
pub const HERO_SLIDES: [Slide; 9] = [
    Slide { path: "image1.jpg", title: "Civil & Interior Works", category: "construction" },
    Slide { path: "image7.jpg", title: "Turnkey D&B", category: "development" },
    Slide { path: "image3.jpg", title: "General Contracting", category: "construction" },
    Slide { path: "image8.jpg", title: "Civil & Interior Works", category: "interior" },
    Slide { path: "image9.jpg", title: "Turnkey D&B", category: "development" },
    Slide { path: "image10.jpg", title: "General Contracting", category: "construction" },
    Slide { path: "img6.webp", title: "General Contracting", category: "construction" },
    Slide { path: "shop.webp", title: "Turnkey D&B", category: "commercial" },
    Slide { path: "realestate.jpg", title: "Civil & Interior Works", category: "residential" },
];

/// Sector rotation on the design-build page.
pub const SECTOR_SLIDES: [Slide; 3] = [
    Slide { path: "image9.jpg", title: "Offices", category: "workplace" },
    Slide { path: "pic5.jpg", title: "Healthcare", category: "clinical" },
    Slide { path: "shop.webp", title: "Industrial Spaces", category: "industrial" },
];

pub const HOME_HEADLINE: Section = Section {
    heading: "Discover Your Dream Space",
    body: "Where construction meets exceptional design. We transform properties \
           into stunning spaces that reflect your style and elevate how you live \
           and work.",
};

pub const HOME_STATS: [ValueItem; 3] = [
    ValueItem { title: "500+", detail: "Projects Delivered" },
    ValueItem { title: "15+", detail: "Years Experience" },
    ValueItem { title: "98%", detail: "Client Satisfaction" },
];

pub const HOME_VALUES: [ValueItem; 4] = [
    ValueItem { title: "Integrity", detail: "Transparent budgets and honest timelines, from first sketch to handover." },
    ValueItem { title: "Craft", detail: "Site teams and designers working to a single, uncompromising standard." },
    ValueItem { title: "Partnership", detail: "One accountable team across design, engineering and construction." },
    ValueItem { title: "Longevity", detail: "Materials and details selected to age well, not just photograph well." },
];

pub const PROCESS_STEPS: [ValueItem; 4] = [
    ValueItem { title: "Discover", detail: "Site studies, program definition and feasibility." },
    ValueItem { title: "Design", detail: "Concept through construction documents under one roof." },
    ValueItem { title: "Build", detail: "Self-performed general contracting with weekly reporting." },
    ValueItem { title: "Deliver", detail: "Commissioning, punch list and aftercare." },
];

pub const WHY_CHOOSE_US: [ValueItem; 3] = [
    ValueItem { title: "Single contract", detail: "Design and construction accountability in one place." },
    ValueItem { title: "Early certainty", detail: "Cost and schedule locked while the design is still moving." },
    ValueItem { title: "Fewer surprises", detail: "The people who drew it are the people who build it." },
];

pub const WHO_WE_ARE: Section = Section {
    heading: "An integrated design-build practice",
    body: "Architects, engineers and builders under a single contract, \
           delivering civil works, interiors and turnkey developments.",
};

pub const ABOUT_SECTIONS: [Section; 2] = [
    Section {
        heading: "Vision",
        body: "Spaces that outlast trends: durable, humane and precisely made.",
    },
    Section {
        heading: "Mission",
        body: "Carry every project from the first conversation to the final \
               fixture with one accountable team.",
    },
];

pub const CONTACT: ContactCard = ContactCard {
    address: "14 Foundry Lane, Portside District",
    phone: "+1 (555) 014-2200",
    email: "hello@atrium.build",
    map_path: "map.jpg",
};

/// Splash assets shown before the landing screen reveals.
pub const LANDING_BACKGROUND: &str = "bg.jpg";
pub const LANDING_LOGO: &str = "footer_logo.png";

/// Backdrop stills behind the values and about sections.
pub const VALUES_BACKDROP: &str = "background.jpg";
pub const ABOUT_STILLS: [&str; 3] = ["office1.jpg", "office5.jpg", "hospital1.jpg"];
pub const WHO_WE_ARE_STILLS: [&str; 4] = ["pic1.jpg", "pic2.jpg", "pic3.jpg", "pic4.jpg"];

/// Ambient walkthrough reels. Availability-checked, never decoded.
pub const WHO_WE_ARE_REEL: &str = "bgv2.mp4";
pub const ABOUT_REEL: &str = "bgv.mp4";
pub const DESIGN_BUILD_REELS: [&str; 3] = ["DB.mp4", "water.mp4", "GC.mp4"];

/// Namespace for content lookups that depend on the route.
#[derive(Debug)]
pub struct PageContent;

impl PageContent {
    pub fn hero_slides() -> &'static [Slide] {
        &HERO_SLIDES
    }

    pub fn sector_slides() -> &'static [Slide] {
        &SECTOR_SLIDES
    }
}

/// Every asset the given page must account for before it reveals.
///
/// The readiness gate for a route is constructed from exactly this list.
pub fn page_assets(route: Route) -> Vec<AssetDescriptor> {
    match route {
        Route::Landing => vec![
            AssetDescriptor::image(LANDING_BACKGROUND),
            AssetDescriptor::image(LANDING_LOGO),
        ],
        Route::Home => {
            let mut assets: Vec<_> = HERO_SLIDES.iter().map(Slide::descriptor).collect();
            assets.push(AssetDescriptor::image(VALUES_BACKDROP));
            assets
        }
        Route::WhoWeAre => {
            let mut assets = vec![AssetDescriptor::video(WHO_WE_ARE_REEL)];
            assets.extend(WHO_WE_ARE_STILLS.map(AssetDescriptor::image));
            assets
        }
        Route::DesignBuild => {
            let mut assets: Vec<_> = SECTOR_SLIDES.iter().map(Slide::descriptor).collect();
            assets.extend(DESIGN_BUILD_REELS.map(AssetDescriptor::video));
            assets
        }
        Route::About => {
            let mut assets = vec![AssetDescriptor::video(ABOUT_REEL)];
            assets.extend(ABOUT_STILLS.map(AssetDescriptor::image));
            assets
        }
        Route::Contact => vec![CONTACT.map_asset()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_a_manifest() {
        for route in Route::ALL {
            assert!(
                !page_assets(route).is_empty(),
                "{route} has no preload manifest"
            );
        }
    }

    #[test]
    fn manifests_have_no_duplicate_ids() {
        for route in Route::ALL {
            let assets = page_assets(route);
            let mut ids: Vec<_> = assets.iter().map(|a| a.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), assets.len(), "duplicate asset in {route}");
        }
    }

    #[test]
    fn carousel_slides_are_tracked_by_their_manifests() {
        let home: Vec<_> = page_assets(Route::Home).iter().map(|a| a.id.clone()).collect();
        for slide in PageContent::hero_slides() {
            assert!(home.contains(&slide.asset_id()));
        }

        let design: Vec<_> = page_assets(Route::DesignBuild)
            .iter()
            .map(|a| a.id.clone())
            .collect();
        for slide in PageContent::sector_slides() {
            assert!(design.contains(&slide.asset_id()));
        }
    }

    #[test]
    fn contact_map_is_the_contact_manifest() {
        let assets = page_assets(Route::Contact);
        assert_eq!(assets, vec![CONTACT.map_asset()]);
    }
}
