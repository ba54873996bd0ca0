//! Estimate snapshot export
//!
//! Renders the current selection as a plain-text summary, writes it to a
//! timestamped file, and builds a pre-filled `mailto:` draft carrying the
//! same body. No state is kept; exporting is a read-only view of the
//! selection.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use url::form_urlencoded;

use crate::catalog::{format_bdt, format_price};
use crate::error::Result;
use crate::selection::Selection;

const SNAPSHOT_TITLE: &str = "Project Estimate";
const EMAIL_SUBJECT: &str = "Project estimate request";

/// Render the selection as a plain-text snapshot.
pub fn render_snapshot(selection: &Selection, now: DateTime<Local>) -> String {
    let totals = selection.totals();
    let time = totals.normalized();

    let mut out = String::new();
    out.push_str(SNAPSHOT_TITLE);
    out.push('\n');
    out.push_str(&format!("Generated: {}\n\n", now.format("%Y-%m-%d %H:%M")));

    if selection.is_empty() {
        out.push_str("No items selected.\n");
    } else {
        for entry in selection.entries() {
            let quantity = if entry.quantity > 1 {
                format!(" (x{})", entry.quantity)
            } else {
                String::new()
            };
            let extended = entry.price_bdt * u64::from(entry.quantity);
            out.push_str(&format!(
                "  {:<44} {:>12}\n",
                format!("{}{}", entry.name, quantity),
                format_price(extended)
            ));
        }
        out.push('\n');
        out.push_str(&format!("Total: BDT {}\n", format_bdt(totals.price_bdt)));
        out.push_str(&format!("Estimated time: {}\n", time));
    }
    out
}

/// Write a snapshot file into `dir`, returning its path.
///
/// The directory is created if missing; the filename carries a second
/// precision timestamp so repeated exports never clobber each other.
pub fn write_snapshot(dir: &Path, selection: &Selection) -> Result<PathBuf> {
    let now = Local::now();
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("estimate-{}.txt", now.format("%Y%m%d-%H%M%S")));
    let mut content = render_snapshot(selection, now);
    content.push('\n');
    content.push_str("Email draft:\n");
    content.push_str(&mailto_draft(selection, now));
    content.push('\n');

    fs::write(&path, content)?;
    Ok(path)
}

/// Build a `mailto:` URL pre-filled with the snapshot as the body.
///
/// The recipient is left empty for the user to fill in their client.
/// Takes the same `now` as the snapshot it accompanies so the two never
/// disagree across a minute boundary.
pub fn mailto_draft(selection: &Selection, now: DateTime<Local>) -> String {
    let body = render_snapshot(selection, now);
    format!(
        "mailto:?subject={}&body={}",
        encode(EMAIL_SUBJECT),
        encode(&body)
    )
}

// form_urlencoded emits '+' for spaces; mail clients expect %20. Literal
// '+' input is already encoded as %2B at this point, so the replace only
// touches spaces.
fn encode(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn sample_selection() -> Selection {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new();
        let item = catalog.find_item("Static Page").unwrap();
        selection.toggle_item(item);
        selection.set_quantity("Static Page", 1);
        let seo = catalog.find_item("SEO Basic Optimization").unwrap();
        selection.toggle_item(seo);
        selection
    }

    #[test]
    fn test_render_snapshot_contents() {
        let snapshot = render_snapshot(&sample_selection(), Local::now());
        assert!(snapshot.contains("Static Page (x2)"));
        assert!(snapshot.contains("BDT 7,800"));
        assert!(snapshot.contains("Free"));
        // 2 * 4h + 2h = 10h -> 1d 2h
        assert!(snapshot.contains("Estimated time: 1d 2h"));
        assert!(snapshot.contains("Total: BDT 7,800"));
    }

    #[test]
    fn test_render_snapshot_empty() {
        let snapshot = render_snapshot(&Selection::new(), Local::now());
        assert!(snapshot.contains("No items selected."));
    }

    #[test]
    fn test_write_snapshot_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(dir.path(), &sample_selection()).unwrap();
        assert!(path.exists());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Static Page"));
        assert!(content.contains("mailto:?subject="));
    }

    #[test]
    fn test_write_snapshot_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports");
        let path = write_snapshot(&nested, &sample_selection()).unwrap();
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn test_mailto_draft_is_percent_encoded() {
        let draft = mailto_draft(&sample_selection(), Local::now());
        assert!(draft.starts_with("mailto:?subject=Project%20estimate%20request&body="));
        assert!(!draft.contains(' '));
        assert!(!draft.contains('\n'));
        assert!(!draft.contains('+'));
    }

    #[test]
    fn test_mailto_draft_body_matches_snapshot_timestamp() {
        let selection = sample_selection();
        let now = Local::now();

        let draft = mailto_draft(&selection, now);
        let encoded_body = draft.rsplit("&body=").next().unwrap();
        assert_eq!(encoded_body, encode(&render_snapshot(&selection, now)));
    }
}
