//! Leads-list view model.

use crate::fmt::{excerpt, truncate};
use crate::models::Lead;
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

const HEADERS: &[&str] = &["NAME", "KONTAKT", "E-MAIL", "NACHRICHT"];
const WIDTHS: &[u16] = &[24, 10, 30, 60];

/// Leads table, filtered by a free-text search over name, e-mail, and
/// message. Messages are shortened to 100 characters like the portal list.
pub fn build_leads_view(leads: &[Lead], search: &str) -> TableViewModel<i64> {
    let search = search.to_lowercase();
    let rows: Vec<ViewRow<i64>> = leads
        .iter()
        .filter(|lead| {
            search.is_empty()
                || lead.full_name().to_lowercase().contains(&search)
                || lead.email.to_lowercase().contains(&search)
                || lead.message.to_lowercase().contains(&search)
        })
        .map(|lead| ViewRow {
            id: lead.id,
            cells: vec![
                ViewCell::plain(truncate(&lead.full_name(), 24)),
                ViewCell::styled(
                    truncate(&lead.contact_type, 10),
                    RowStyleClass::Accent,
                ),
                ViewCell::plain(truncate(&lead.email, 30)),
                ViewCell::plain(excerpt(&lead.message, 100)),
            ],
            style: RowStyleClass::Normal,
        })
        .collect();

    let title = if search.is_empty() {
        format!(" Kontaktanfragen [{}] ", rows.len())
    } else {
        format!(" Kontaktanfragen (Suche: {}) [{}] ", search, rows.len())
    };

    TableViewModel {
        title,
        headers: HEADERS.iter().map(|s| s.to_string()).collect(),
        widths: WIDTHS.to_vec(),
        rows,
        sort_column: None,
        sort_ascending: true,
        pager: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: i64, first: &str, email: &str, message: &str) -> Lead {
        Lead {
            id,
            first_name: first.to_string(),
            last_name: "Muster".to_string(),
            email: email.to_string(),
            phone: String::new(),
            contact_type: "citizen".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn search_spans_name_email_and_message() {
        let leads = vec![
            lead(1, "Meike", "meike@example.org", "Anfrage zu Abstimmung"),
            lead(2, "Oliver", "oli@example.org", "Pressekontakt"),
        ];
        assert_eq!(build_leads_view(&leads, "meike").rows.len(), 1);
        assert_eq!(build_leads_view(&leads, "OLI@").rows.len(), 1);
        assert_eq!(build_leads_view(&leads, "presse").rows.len(), 1);
        assert_eq!(build_leads_view(&leads, "").rows.len(), 2);
    }

    #[test]
    fn long_messages_are_excerpted() {
        let message = "x".repeat(150);
        let leads = vec![lead(1, "Meike", "m@example.org", &message)];
        let view = build_leads_view(&leads, "");
        assert_eq!(view.rows[0].cells[3].text.chars().count(), 103);
        assert!(view.rows[0].cells[3].text.ends_with("..."));
    }
}
