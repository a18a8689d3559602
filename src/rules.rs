// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Expected-connection rules between tool categories

use crate::types::{
    Category, ConnectionQuality, ConnectionRule, IssueCategory, IssueTemplate, Severity,
};

const fn rule(
    source: Category,
    target: Category,
    expected: ConnectionQuality,
    issue: IssueTemplate,
) -> ConnectionRule {
    ConnectionRule { source, target, expected, issue }
}

/// Rules checked by the missing-connection analyzer, in report order
pub static CONNECTION_RULES: &[ConnectionRule] = &[
    rule(
        Category::Website,
        Category::Crm,
        ConnectionQuality::Native,
        IssueTemplate {
            id: "website-crm",
            severity: Severity::Critical,
            title: "Website leads never reach your CRM",
            description: "Inquiries captured on your website have to be re-entered before anyone can follow up, and some are never entered at all.",
            category: IssueCategory::MissingIntegration,
        },
    ),
    rule(
        Category::Forms,
        Category::Crm,
        ConnectionQuality::Native,
        IssueTemplate {
            id: "forms-crm",
            severity: Severity::Critical,
            title: "Form submissions are stranded",
            description: "Intake and contact forms collect customer details that your CRM never sees.",
            category: IssueCategory::DataSilo,
        },
    ),
    rule(
        Category::Payments,
        Category::Accounting,
        ConnectionQuality::Native,
        IssueTemplate {
            id: "payments-accounting",
            severity: Severity::Critical,
            title: "Payments are reconciled by hand",
            description: "Money collected by your payment processor has to be matched to invoices manually, which delays the books and hides errors.",
            category: IssueCategory::ManualProcess,
        },
    ),
    rule(
        Category::Crm,
        Category::EmailMarketing,
        ConnectionQuality::Native,
        IssueTemplate {
            id: "crm-email",
            severity: Severity::Warning,
            title: "Email lists drift out of sync with your CRM",
            description: "New customers and status changes don't flow into your email audiences, so campaigns go to stale lists.",
            category: IssueCategory::MissingIntegration,
        },
    ),
    rule(
        Category::Scheduling,
        Category::Crm,
        ConnectionQuality::Native,
        IssueTemplate {
            id: "scheduling-crm",
            severity: Severity::Warning,
            title: "Bookings don't update customer records",
            description: "Appointments live only in the scheduler, so nobody can see a customer's booking history next to their deals.",
            category: IssueCategory::MissingIntegration,
        },
    ),
    rule(
        Category::Crm,
        Category::ProjectManagement,
        ConnectionQuality::Automation,
        IssueTemplate {
            id: "crm-projects",
            severity: Severity::Warning,
            title: "Won deals don't kick off projects",
            description: "Someone has to recreate each closed deal as a project by hand before delivery can start.",
            category: IssueCategory::ManualProcess,
        },
    ),
    rule(
        Category::Crm,
        Category::Payments,
        ConnectionQuality::Native,
        IssueTemplate {
            id: "crm-payments",
            severity: Severity::Warning,
            title: "Payment history is invisible to sales",
            description: "Your CRM can't tell who has paid, who is overdue, or what a customer is worth.",
            category: IssueCategory::MissingIntegration,
        },
    ),
    rule(
        Category::Scheduling,
        Category::Communication,
        ConnectionQuality::Native,
        IssueTemplate {
            id: "scheduling-communication",
            severity: Severity::Info,
            title: "Appointment reminders are sent manually",
            description: "Confirmations and reminders aren't triggered by bookings, which leads to avoidable no-shows.",
            category: IssueCategory::ManualProcess,
        },
    ),
    rule(
        Category::Website,
        Category::Analytics,
        ConnectionQuality::Native,
        IssueTemplate {
            id: "website-analytics",
            severity: Severity::Info,
            title: "Website traffic isn't measured",
            description: "Without analytics on your site you can't tell which channels bring in customers.",
            category: IssueCategory::DataSilo,
        },
    ),
    rule(
        Category::Documents,
        Category::Crm,
        ConnectionQuality::Automation,
        IssueTemplate {
            id: "documents-crm",
            severity: Severity::Info,
            title: "Contracts and files live apart from customer records",
            description: "Signed agreements and shared files can't be found from the customer they belong to.",
            category: IssueCategory::DataSilo,
        },
    ),
];

/// Rules that mention the given category on either side
#[must_use]
pub fn rules_involving(category: Category) -> Vec<&'static ConnectionRule> {
    CONNECTION_RULES
        .iter()
        .filter(|r| r.source == category || r.target == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rule_ids_unique() {
        let ids: HashSet<_> = CONNECTION_RULES.iter().map(|r| r.issue.id).collect();
        assert_eq!(ids.len(), CONNECTION_RULES.len());
    }

    #[test]
    fn test_rules_join_distinct_categories() {
        for rule in CONNECTION_RULES {
            assert_ne!(rule.source, rule.target, "rule {} is reflexive", rule.issue.id);
        }
    }

    #[test]
    fn test_rules_cover_every_severity() {
        let severities: HashSet<_> = CONNECTION_RULES.iter().map(|r| r.issue.severity).collect();
        assert!(severities.contains(&Severity::Critical));
        assert!(severities.contains(&Severity::Warning));
        assert!(severities.contains(&Severity::Info));
    }

    #[test]
    fn test_rules_involving_crm() {
        let crm = rules_involving(Category::Crm);
        assert!(crm.len() >= 5);
        assert!(crm.iter().all(|r| r.source == Category::Crm || r.target == Category::Crm));
        assert!(rules_involving(Category::Automation).is_empty());
    }
}
