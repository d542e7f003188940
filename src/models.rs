use std::fmt;

pub const DEFAULT_NAMESPACE: &str = "default";

pub static DAEMONSETS_HEADER: [&str; 8] = [
    "NAMESPACE",
    "NAME",
    "DESIRED",
    "CURRENT",
    "UP-TO-DATE",
    "AVAILABLE",
    "NODE SELECTOR",
    "AGE",
];

pub static DAEMONSETS_WIDE_HEADER: [&str; 11] = [
    "NAMESPACE",
    "NAME",
    "DESIRED",
    "CURRENT",
    "UP-TO-DATE",
    "AVAILABLE",
    "NODE SELECTOR",
    "AGE",
    "CONTAINERS",
    "IMAGES",
    "SELECTOR",
];

/// Parameters of a single search, normalized once at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    /// Target namespace; empty means all namespaces.
    pub namespace: String,
    pub label_selector: String,
    pub field_selector: String,
    /// Substring the resource name must contain; empty matches everything.
    pub keyword: String,
    pub wide: bool,
}

impl Query {
    pub fn new(
        namespace: impl Into<String>,
        all_namespaces: bool,
        label_selector: impl Into<String>,
        field_selector: impl Into<String>,
        keyword: impl Into<String>,
        wide: bool,
    ) -> Self {
        let mut namespace = namespace.into();
        if namespace.is_empty() {
            namespace = DEFAULT_NAMESPACE.to_string();
        }
        if all_namespaces {
            namespace.clear();
        }

        Self {
            namespace,
            label_selector: label_selector.into(),
            field_selector: field_selector.into(),
            keyword: keyword.into(),
            wide,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.keyword.is_empty() || name.contains(self.keyword.as_str())
    }

    pub fn header(&self) -> &'static [&'static str] {
        if self.wide { &DAEMONSETS_WIDE_HEADER[..] } else { &DAEMONSETS_HEADER[..] }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl AgeUnit {
    pub fn seconds(self) -> i64 {
        match self {
            AgeUnit::Seconds => 1,
            AgeUnit::Minutes => 60,
            AgeUnit::Hours => 3_600,
            AgeUnit::Days => 86_400,
        }
    }

    pub fn letter(self) -> char {
        match self {
            AgeUnit::Seconds => 's',
            AgeUnit::Minutes => 'm',
            AgeUnit::Hours => 'h',
            AgeUnit::Days => 'd',
        }
    }
}

/// Elapsed time since creation, expressed in the largest whole unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Age {
    pub magnitude: i64,
    pub unit: AgeUnit,
}

impl Age {
    pub fn from_seconds(elapsed: i64) -> Self {
        let elapsed = elapsed.max(0);
        let unit = [AgeUnit::Days, AgeUnit::Hours, AgeUnit::Minutes]
            .into_iter()
            .find(|unit| elapsed / unit.seconds() >= 1)
            .unwrap_or(AgeUnit::Seconds);

        Self {
            magnitude: elapsed / unit.seconds(),
            unit,
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.letter())
    }
}

/// One formatted line of the daemon set report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub namespace: String,
    pub name: String,
    pub desired: i32,
    pub current: i32,
    pub up_to_date: i32,
    pub available: i32,
    pub node_selector: String,
    pub age: Age,
    pub containers: String,
    pub images: String,
    pub selector: String,
}

impl ReportRow {
    pub fn cells(&self, wide: bool) -> Vec<String> {
        let mut cells = vec![
            self.namespace.clone(),
            self.name.clone(),
            self.desired.to_string(),
            self.current.to_string(),
            self.up_to_date.to_string(),
            self.available.to_string(),
            self.node_selector.clone(),
            self.age.to_string(),
        ];
        if wide {
            cells.push(self.containers.clone());
            cells.push(self.images.clone());
            cells.push(self.selector.clone());
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_namespace_falls_back_to_default() {
        let query = Query::new("", false, "", "", "", false);
        assert_eq!(query.namespace, "default");
    }

    #[test]
    fn all_namespaces_overrides_namespace() {
        let query = Query::new("kube-system", true, "", "", "", false);
        assert_eq!(query.namespace, "");

        let query = Query::new("", true, "", "", "", false);
        assert_eq!(query.namespace, "");
    }

    #[test]
    fn keyword_match_is_case_sensitive_substring() {
        let query = Query::new("", false, "", "", "fluentd", false);
        assert!(query.matches("fluentd-logger"));
        assert!(query.matches("my-fluentd"));
        assert!(!query.matches("Fluentd-logger"));
        assert!(!query.matches("kube-proxy"));
    }

    #[test]
    fn empty_keyword_matches_everything() {
        let query = Query::new("", false, "", "", "", false);
        assert!(query.matches("anything"));
        assert!(query.matches(""));
    }

    #[test]
    fn age_picks_largest_whole_unit() {
        assert_eq!(Age::from_seconds(45).to_string(), "45s");
        assert_eq!(Age::from_seconds(59).to_string(), "59s");
        assert_eq!(Age::from_seconds(60).to_string(), "1m");
        assert_eq!(Age::from_seconds(3_599).to_string(), "59m");
        assert_eq!(Age::from_seconds(3_600).to_string(), "1h");
        assert_eq!(Age::from_seconds(3_601).to_string(), "1h");
        assert_eq!(Age::from_seconds(86_399).to_string(), "23h");
        assert_eq!(Age::from_seconds(86_400).to_string(), "1d");
        assert_eq!(Age::from_seconds(90_000).to_string(), "1d");
        assert_eq!(Age::from_seconds(10 * 86_400 + 5).to_string(), "10d");
    }

    #[test]
    fn negative_age_clamps_to_zero_seconds() {
        let age = Age::from_seconds(-30);
        assert_eq!(age.magnitude, 0);
        assert_eq!(age.unit, AgeUnit::Seconds);
    }

    #[test]
    fn wide_cells_extend_normal_cells() {
        let row = ReportRow {
            namespace: "kube-system".into(),
            name: "fluentd-logger".into(),
            desired: 5,
            current: 4,
            up_to_date: 3,
            available: 2,
            node_selector: "<none>".into(),
            age: Age::from_seconds(7_200),
            containers: "fluentd".into(),
            images: "fluent/fluentd:v1".into(),
            selector: "app=fluentd".into(),
        };

        let normal = row.cells(false);
        let wide = row.cells(true);
        assert_eq!(normal.len(), DAEMONSETS_HEADER.len());
        assert_eq!(wide.len(), DAEMONSETS_WIDE_HEADER.len());
        assert_eq!(&wide[..normal.len()], &normal[..]);
        assert_eq!(normal[7], "2h");
    }
}
