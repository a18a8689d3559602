// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Tool catalog - static reference data for every tool a user can place

use crate::types::{CatalogTool, Category, PlacedTool};

/// Name shown for a catalog ID that does not resolve
pub const UNKNOWN_TOOL: &str = "Unknown tool";

const fn tool(
    id: &'static str,
    name: &'static str,
    category: Category,
    icon: &'static str,
    description: &'static str,
    monthly_price: Option<f64>,
) -> CatalogTool {
    CatalogTool { id, name, category, icon, description, monthly_price }
}

/// Every tool in the catalog
pub static TOOLS: &[CatalogTool] = &[
    // CRM
    tool("hubspot", "HubSpot CRM", Category::Crm, "🧲", "Contacts, deals and pipeline tracking", Some(50.0)),
    tool("salesforce", "Salesforce", Category::Crm, "☁️", "Enterprise sales CRM", Some(75.0)),
    tool("pipedrive", "Pipedrive", Category::Crm, "📈", "Deal pipeline for small sales teams", Some(29.0)),
    tool("zoho-crm", "Zoho CRM", Category::Crm, "📇", "Budget CRM with workflow rules", Some(20.0)),
    tool("jobber", "Jobber", Category::Crm, "🧰", "Field service quotes, jobs and clients", Some(69.0)),
    // Email marketing
    tool("mailchimp", "Mailchimp", Category::EmailMarketing, "🐵", "Newsletters and audience lists", Some(35.0)),
    tool("constant-contact", "Constant Contact", Category::EmailMarketing, "✉️", "Email campaigns for local businesses", Some(30.0)),
    tool("convertkit", "ConvertKit", Category::EmailMarketing, "📨", "Creator-focused email sequences", Some(29.0)),
    tool("activecampaign", "ActiveCampaign", Category::EmailMarketing, "⚡", "Email automation and lead scoring", Some(39.0)),
    // Scheduling
    tool("calendly", "Calendly", Category::Scheduling, "📅", "Self-serve meeting booking", Some(12.0)),
    tool("acuity", "Acuity Scheduling", Category::Scheduling, "🗓️", "Appointment booking with intake forms", Some(20.0)),
    tool("google-calendar", "Google Calendar", Category::Scheduling, "📆", "Shared team calendars", None),
    tool("square-appointments", "Square Appointments", Category::Scheduling, "⏰", "Booking tied to point of sale", Some(29.0)),
    // Payments
    tool("stripe", "Stripe", Category::Payments, "💳", "Online card payments and subscriptions", None),
    tool("square", "Square", Category::Payments, "⬛", "In-person and online payments", None),
    tool("paypal", "PayPal", Category::Payments, "🅿️", "Checkout and invoice payments", None),
    tool("quickbooks-payments", "QuickBooks Payments", Category::Payments, "💵", "Invoice payments inside QuickBooks", None),
    // Accounting
    tool("quickbooks", "QuickBooks Online", Category::Accounting, "📒", "Bookkeeping, invoicing and payroll", Some(30.0)),
    tool("xero", "Xero", Category::Accounting, "🧾", "Cloud accounting and bank feeds", Some(29.0)),
    tool("freshbooks", "FreshBooks", Category::Accounting, "📗", "Invoicing and time tracking", Some(19.0)),
    tool("wave", "Wave", Category::Accounting, "🌊", "Free bookkeeping for sole traders", Some(0.0)),
    // Communication
    tool("slack", "Slack", Category::Communication, "💬", "Team chat and channels", Some(8.75)),
    tool("gmail", "Gmail", Category::Communication, "📧", "Business email on Google Workspace", Some(7.2)),
    tool("outlook", "Outlook", Category::Communication, "📬", "Business email on Microsoft 365", Some(6.0)),
    tool("microsoft-teams", "Microsoft Teams", Category::Communication, "👥", "Chat and video meetings", Some(4.0)),
    tool("ringcentral", "RingCentral", Category::Communication, "☎️", "Business phone and SMS", Some(30.0)),
    // Project management
    tool("asana", "Asana", Category::ProjectManagement, "🎯", "Tasks, projects and timelines", Some(11.0)),
    tool("trello", "Trello", Category::ProjectManagement, "📋", "Kanban boards", Some(5.0)),
    tool("monday", "monday.com", Category::ProjectManagement, "🟪", "Work management boards", Some(12.0)),
    tool("clickup", "ClickUp", Category::ProjectManagement, "✅", "Tasks, docs and goals", Some(7.0)),
    // Forms
    tool("typeform", "Typeform", Category::Forms, "📝", "Conversational forms and surveys", Some(25.0)),
    tool("google-forms", "Google Forms", Category::Forms, "🗒️", "Simple forms feeding a spreadsheet", None),
    tool("jotform", "Jotform", Category::Forms, "🧾", "Form builder with payments and PDFs", Some(34.0)),
    tool("paper-forms", "Paper Forms", Category::Forms, "📄", "Printed intake sheets typed in later", None),
    // Website
    tool("wordpress", "WordPress", Category::Website, "🌐", "Self-hosted website and blog", Some(25.0)),
    tool("wix", "Wix", Category::Website, "🖱️", "Drag-and-drop website builder", Some(27.0)),
    tool("squarespace", "Squarespace", Category::Website, "◼️", "Designer website templates", Some(23.0)),
    tool("shopify", "Shopify", Category::Website, "🛍️", "Online store and checkout", Some(39.0)),
    tool("webflow", "Webflow", Category::Website, "🕸️", "Visual site builder with CMS", Some(29.0)),
    // Automation
    tool("zapier", "Zapier", Category::Automation, "⚙️", "Trigger-action glue between apps", Some(30.0)),
    tool("make", "Make", Category::Automation, "🔁", "Visual scenario automation", Some(10.0)),
    tool("power-automate", "Power Automate", Category::Automation, "🔀", "Microsoft workflow automation", Some(15.0)),
    // Analytics
    tool("google-analytics", "Google Analytics", Category::Analytics, "📊", "Website traffic analytics", None),
    tool("hotjar", "Hotjar", Category::Analytics, "🔥", "Heatmaps and session recordings", Some(32.0)),
    tool("mixpanel", "Mixpanel", Category::Analytics, "📉", "Product event analytics", Some(20.0)),
    tool("looker-studio", "Looker Studio", Category::Analytics, "🔎", "Dashboards over Google data", None),
    // Documents
    tool("google-drive", "Google Drive", Category::Documents, "🗂️", "Shared files and folders", Some(6.0)),
    tool("dropbox", "Dropbox", Category::Documents, "📦", "File sync and sharing", Some(15.0)),
    tool("docusign", "DocuSign", Category::Documents, "✍️", "Electronic signatures", Some(25.0)),
    tool("notion", "Notion", Category::Documents, "📓", "Wiki and docs workspace", Some(10.0)),
    tool("excel", "Spreadsheets", Category::Documents, "🧮", "Excel or Sheets used as a database", Some(7.0)),
];

/// Look up a catalog tool by ID
#[must_use]
pub fn tool_by_id(id: &str) -> Option<&'static CatalogTool> {
    TOOLS.iter().find(|t| t.id == id)
}

/// All catalog tools in a category, in catalog order
#[must_use]
pub fn tools_by_category(category: Category) -> Vec<&'static CatalogTool> {
    TOOLS.iter().filter(|t| t.category == category).collect()
}

/// Categories present in the catalog, in first-seen order
#[must_use]
pub fn categories() -> Vec<Category> {
    let mut seen = Vec::new();
    for tool in TOOLS {
        if !seen.contains(&tool.category) {
            seen.push(tool.category);
        }
    }
    seen
}

/// Display name for a catalog ID, or [`UNKNOWN_TOOL`]
#[must_use]
pub fn tool_name(id: &str) -> &'static str {
    tool_by_id(id).map_or(UNKNOWN_TOOL, |t| t.name)
}

/// Sum of catalog monthly prices across placed tools
///
/// Tools without a flat price, or with an unknown catalog ID, add nothing.
#[must_use]
pub fn monthly_cost(tools: &[PlacedTool]) -> f64 {
    tools
        .iter()
        .filter_map(|t| tool_by_id(&t.tool_id))
        .filter_map(|t| t.monthly_price)
        .sum()
}

impl PlacedTool {
    /// Resolve this instance's catalog entry
    #[must_use]
    pub fn catalog(&self) -> Option<&'static CatalogTool> {
        tool_by_id(&self.tool_id)
    }

    /// Resolve this instance's category
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.catalog().map(|t| t.category)
    }

    /// Display name, with a placeholder for unknown catalog IDs
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        tool_name(&self.tool_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use std::collections::HashSet;

    fn placed(instance: &str, tool_id: &str) -> PlacedTool {
        PlacedTool {
            instance_id: instance.into(),
            tool_id: tool_id.into(),
            position: Position::default(),
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = TOOLS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TOOLS.len());
    }

    #[test]
    fn test_catalog_covers_every_category() {
        let cats = categories();
        assert_eq!(cats.len(), Category::ALL.len());
        for category in Category::ALL {
            assert!(!tools_by_category(category).is_empty(), "{category:?} has no tools");
        }
    }

    #[test]
    fn test_catalog_size() {
        assert!(TOOLS.len() >= 48 && TOOLS.len() <= 55);
    }

    #[test]
    fn test_lookup_unknown_id() {
        assert!(tool_by_id("not-a-tool").is_none());
        assert_eq!(tool_name("not-a-tool"), UNKNOWN_TOOL);
        assert_eq!(placed("a", "nope").display_name(), UNKNOWN_TOOL);
        assert!(placed("a", "nope").category().is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        let hubspot = tool_by_id("hubspot").unwrap();
        assert_eq!(hubspot.name, "HubSpot CRM");
        assert_eq!(hubspot.category, Category::Crm);
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(categories().first(), Some(&Category::Crm));
        assert_eq!(categories().last(), Some(&Category::Documents));
    }

    #[test]
    fn test_monthly_cost_skips_unpriced_and_unknown() {
        let tools = vec![
            placed("a", "hubspot"),
            placed("b", "stripe"),
            placed("c", "mystery"),
            placed("d", "hubspot"),
        ];
        assert!((monthly_cost(&tools) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_styles_are_distinct() {
        let colors: HashSet<_> = Category::ALL.iter().map(|c| c.style().color).collect();
        assert_eq!(colors.len(), Category::ALL.len());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("crm".parse::<Category>().unwrap(), Category::Crm);
        assert_eq!("Project_Management".parse::<Category>().unwrap(), Category::ProjectManagement);
        assert!("spaceships".parse::<Category>().is_err());
    }
}
