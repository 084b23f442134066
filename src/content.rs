// Site content for LifeGuard - pages, nav labels, CTAs, and resource links
// Fixed at startup; only the derived visibility/active state ever mutates

use crate::model::CtaAction;
use crate::state::{NavLink, NavMenu, Page, PageRegistry};

/// A call-to-action control. The declared descriptor is parsed into an
/// action when the content is built; a malformed descriptor leaves the
/// button inert.
pub struct Cta {
    pub label: String,
    pub action: CtaAction,
}

impl Cta {
    pub fn new(label: impl Into<String>, descriptor: &str) -> Self {
        Self {
            label: label.into(),
            action: CtaAction::parse(descriptor),
        }
    }
}

/// An outbound link in the resources list.
pub struct Resource {
    pub label: String,
    pub href: String,
    pub blurb: String,
}

impl Resource {
    pub fn new(
        label: impl Into<String>,
        href: impl Into<String>,
        blurb: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            blurb: blurb.into(),
        }
    }
}

pub struct Section {
    pub heading: String,
    pub body: String,
}

impl Section {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// Everything one page shows: identity, nav label, hero text, body sections,
/// CTA buttons, and (for the resources page) outbound links.
pub struct PageContent {
    pub id: String,
    pub title: String,
    pub nav_label: String,
    pub intro: String,
    pub sections: Vec<Section>,
    pub ctas: Vec<Cta>,
    pub resources: Vec<Resource>,
}

impl PageContent {
    fn new(
        id: &str,
        title: &str,
        nav_label: &str,
        intro: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            nav_label: nav_label.to_string(),
            intro: intro.to_string(),
            sections: Vec::new(),
            ctas: Vec::new(),
            resources: Vec::new(),
        }
    }
}

pub const DEFAULT_PAGE: &str = "home";

/// Builds the full LifeGuard site. Pages and links never change after this
/// returns.
pub fn site_pages() -> Vec<PageContent> {
    let mut home = PageContent::new(
        "home",
        "Safety skills that save lives",
        "Home",
        "LifeGuard teaches practical life-safety skills: first aid, water \
         safety, and emergency preparedness for schools, workplaces, and \
         families.",
    );
    home.ctas = vec![
        Cta::new("Learn more about us", "navigateTo('about')"),
        Cta::new("Browse our services", "navigateTo('services')"),
    ];
    home.sections = vec![
        Section::new(
            "Why it matters",
            "Most emergencies are survivable when someone nearby knows what \
             to do in the first few minutes. Our training focuses on exactly \
             those minutes.",
        ),
        Section::new(
            "Who we train",
            "Teachers, lifeguards, office wardens, parents, and anyone who \
             wants to be the calm pair of hands when something goes wrong.",
        ),
    ];

    let mut about = PageContent::new(
        "about",
        "About LifeGuard",
        "About",
        "LifeGuard is a team of certified rescue and first-aid instructors \
         founded in 2015.",
    );
    about.sections = vec![
        Section::new(
            "Our approach",
            "Short, hands-on sessions with realistic scenarios. No slideware \
             marathons; every participant practices every skill.",
        ),
        Section::new(
            "Certification",
            "All instructors hold current national first-aid instructor \
             certificates and renew them annually.",
        ),
    ];
    about.ctas = vec![Cta::new("See what we offer", "navigateTo('services')")];

    let mut services = PageContent::new(
        "services",
        "Our services",
        "Services",
        "Courses and audits for organizations and individuals.",
    );
    services.sections = vec![
        Section::new(
            "First aid courses",
            "Basic and advanced courses covering CPR, bleeding control, \
             choking, burns, and fractures. Groups of up to twelve.",
        ),
        Section::new(
            "Water safety training",
            "Pool and open-water rescue technique, supervision planning for \
             camps and schools, and seasonal refreshers for lifeguards.",
        ),
        Section::new(
            "Workplace safety audits",
            "On-site review of evacuation plans, first-aid stations, and \
             staff readiness, with a written report and follow-up session.",
        ),
    ];
    services.ctas = vec![Cta::new("Get in touch", "navigateTo('contact')")];

    let mut resources = PageContent::new(
        "resources",
        "Useful resources",
        "Resources",
        "Curated external guides and reference material. Links open in your \
         browser.",
    );
    resources.resources = vec![
        Resource::new(
            "WHO first aid guidelines",
            "https://www.who.int/health-topics/first-aid",
            "International baseline recommendations for lay responders.",
        ),
        Resource::new(
            "Red Cross learning hub",
            "https://www.redcross.org/take-a-class",
            "Self-paced courses and skill refreshers.",
        ),
        Resource::new(
            "Water safety handbook",
            "https://www.ilsf.org/resources",
            "Drowning-prevention material from the International Life \
             Saving Federation.",
        ),
        Resource::new(
            "Emergency preparedness checklists",
            "https://www.ready.gov/kit",
            "Household and workplace readiness checklists.",
        ),
    ];

    let mut contact = PageContent::new(
        "contact",
        "Contact us",
        "Contact",
        "Write to hello@lifeguard.example or call +1 555 0123. We answer \
         within one working day.",
    );
    contact.sections = vec![Section::new(
        "Visit us",
        "Training center: 14 Harbor Street, open Monday to Friday, \
         9:00-18:00.",
    )];

    vec![home, about, services, resources, contact]
}

/// Page registry derived from the content, in document order.
pub fn build_registry(pages: &[PageContent]) -> PageRegistry {
    PageRegistry::new(
        pages
            .iter()
            .map(|p| Page::new(p.id.clone(), p.title.clone()))
            .collect(),
    )
}

/// Navigation menu derived from the content, one link per page.
pub fn build_menu(pages: &[PageContent]) -> NavMenu {
    NavMenu::new(
        pages
            .iter()
            .map(|p| NavLink::new(p.nav_label.clone(), p.id.clone()))
            .collect(),
    )
}
