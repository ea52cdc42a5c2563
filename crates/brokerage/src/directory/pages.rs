use super::records::StaticPage;

const PORTAL_PAGES: &[StaticPage] = &[
    StaticPage {
        id: "dashboard",
        title: "Dashboard",
        description: "Pipeline, production, and activity overview",
        path: "/dashboard",
    },
    StaticPage {
        id: "contacts",
        title: "Contacts",
        description: "Clients, prospects, and cooperating brokers",
        path: "/contacts",
    },
    StaticPage {
        id: "deals",
        title: "Deals",
        description: "Residential, leasing, and investment sales pipeline",
        path: "/deals",
    },
    StaticPage {
        id: "deal-rooms",
        title: "Deal Rooms",
        description: "Shared document rooms for buyers and tenants",
        path: "/deal-rooms",
    },
    StaticPage {
        id: "marketing",
        title: "Marketing Center",
        description: "Flyers, email campaigns, and listing promotion",
        path: "/marketing",
    },
    StaticPage {
        id: "templates",
        title: "Templates",
        description: "Contract and marketing templates with merge tags",
        path: "/templates",
    },
    StaticPage {
        id: "e-sign",
        title: "E-Sign",
        description: "Send documents for electronic signature",
        path: "/esign",
    },
    StaticPage {
        id: "recruiting",
        title: "Recruiting",
        description: "Candidate pipeline and onboarding checklists",
        path: "/hr/recruiting",
    },
    StaticPage {
        id: "commission-calculator",
        title: "Commission Calculator",
        description: "Split, cap, and tax estimates per transaction",
        path: "/tools/commission",
    },
    StaticPage {
        id: "admin",
        title: "Admin",
        description: "Team members, roles, and portal settings",
        path: "/admin",
    },
];

/// Built-in catalogue of navigable portal screens.
pub fn portal_pages() -> Vec<StaticPage> {
    PORTAL_PAGES.to_vec()
}
