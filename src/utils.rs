use crate::models::Age;
use comfy_table::{ContentArrangement, Table, presets::NOTHING};
use indicatif::{ProgressBar, ProgressStyle};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::jiff::Timestamp;
use std::collections::BTreeMap;

pub const NONE: &str = "<none>";

/// Minimum number of spaces between two columns.
pub const COLUMN_GAP: u16 = 3;

// --- SHARED SPINNER ---
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(120));
    pb
}

/// Joins a selector map into `k1=v1,k2=v2`, or `<none>` when there is nothing to show.
pub fn join_selector(selector: Option<&BTreeMap<String, String>>) -> String {
    match selector {
        Some(map) if !map.is_empty() => map
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(","),
        _ => NONE.to_string(),
    }
}

/// Age of an object created at `created`, as seen at `now`.
pub fn age_since(created: Option<&Time>, now: Timestamp) -> Age {
    match created {
        Some(time) => Age::from_seconds(now.as_second() - time.0.as_second()),
        None => Age::from_seconds(0),
    }
}

// --- SHARED TABLE RENDERING ---
/// Renders rows under `header` as left aligned columns, `kubectl get` style.
pub fn render_table<R>(header: &[&str], rows: R) -> String
where
    R: IntoIterator<Item = Vec<String>>,
{
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(header.to_vec())
        .add_rows(rows);

    let last = header.len().saturating_sub(1);
    for (idx, column) in table.column_iter_mut().enumerate() {
        let right = if idx == last { 0 } else { COLUMN_GAP };
        column.set_padding((0, right));
    }

    let mut out = String::new();
    for line in table.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_selector_is_none() {
        assert_eq!(join_selector(None), "<none>");
        assert_eq!(join_selector(Some(&BTreeMap::new())), "<none>");
    }

    #[test]
    fn selector_pairs_are_comma_joined() {
        let map = BTreeMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);
        let joined = join_selector(Some(&map));
        let mut parts: Vec<&str> = joined.split(',').collect();
        parts.sort();
        assert_eq!(parts, vec!["a=1", "b=2"]);
    }

    #[test]
    fn age_since_uses_creation_time() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let created = Time(Timestamp::from_second(1_700_000_000 - 7_300).unwrap());
        assert_eq!(age_since(Some(&created), now).to_string(), "2h");
        assert_eq!(age_since(None, now).to_string(), "0s");
    }

    #[test]
    fn columns_are_separated_by_gap() {
        let out = render_table(
            &["NAMESPACE", "NAME"],
            vec![vec!["kube-system".to_string(), "fluentd".to_string()]],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "NAMESPACE     NAME");
        assert_eq!(lines[1], "kube-system   fluentd");
    }

    #[test]
    fn header_only_table_has_one_line() {
        let out = render_table(&["NAMESPACE", "NAME"], Vec::<Vec<String>>::new());
        assert_eq!(out, "NAMESPACE   NAME\n");
    }
}
