//! Whole-document identity report: per-node rows, duplicate classes, totals.

use crate::ident::{DuplicateGroup, Identifier, Resolution, duplicate_identities};
use crate::tree::NodePath;

use serde::Serialize;
use std::fmt::Write as _;
use tracing::warn;

#[derive(Debug, Clone, Serialize)]
pub struct IdentityRow {
    pub path: NodePath,
    pub element: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub nodes: usize,
    pub resolved: usize,
    pub malformed: usize,
    pub duplicate_groups: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdentityReport {
    pub rows: Vec<IdentityRow>,
    pub duplicates: Vec<DuplicateGroup>,
    pub totals: TotalsView,
}

/// Build the report. Unresolvable nodes are kept as error rows and logged.
pub fn build_identity_report(resolutions: &[Resolution]) -> IdentityReport {
    let duplicates = duplicate_identities(resolutions);

    let mut resolved = 0usize;
    let rows: Vec<IdentityRow> = resolutions
        .iter()
        .map(|r| match &r.result {
            Ok(id) => {
                resolved += 1;
                IdentityRow {
                    path: r.path.clone(),
                    element: r.element.clone(),
                    urn: Some(id.to_string()),
                    identifier: Some(id.clone()),
                    error: None,
                }
            }
            Err(e) => {
                warn!(path = %r.path, element = r.element.as_str(), "{}", e);
                IdentityRow {
                    path: r.path.clone(),
                    element: r.element.clone(),
                    identifier: None,
                    urn: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    for g in &duplicates {
        warn!(
            identifier = %g.identifier,
            nodes = g.paths.len(),
            "identifier shared by several nodes"
        );
    }

    IdentityReport {
        totals: TotalsView {
            nodes: rows.len(),
            resolved,
            malformed: rows.len() - resolved,
            duplicate_groups: duplicates.len(),
        },
        rows,
        duplicates,
    }
}

/// Plain-text rendering: one line per resolved node, then duplicate classes.
pub fn render_text(report: &IdentityReport) -> String {
    let mut out = String::new();
    for row in &report.rows {
        if let Some(urn) = &row.urn {
            let _ = writeln!(out, "{}\t{}\t{}", row.path, row.element, urn);
        }
    }
    for g in &report.duplicates {
        let paths: Vec<String> = g.paths.iter().map(NodePath::to_string).collect();
        let _ = writeln!(out, "duplicate\t{}\t{}", g.identifier, paths.join(" "));
    }
    let t = &report.totals;
    let _ = writeln!(
        out,
        "{} nodes, {} resolved, {} malformed, {} duplicate groups",
        t.nodes, t.resolved, t.malformed, t.duplicate_groups
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::{ResolverConfig, identify_all, roles};
    use crate::tree::ElementSpec;
    use pretty_assertions::assert_eq;

    #[test]
    fn totals_and_rows() {
        let root = ElementSpec::new("Bundle")
            .child(
                ElementSpec::new("M")
                    .flag(roles::IS_MAINTAINABLE)
                    .attr(roles::AGENCY, "a")
                    .attr(roles::ID, "m"),
            )
            .validate_and_build()
            .unwrap();
        let report = build_identity_report(&identify_all(&root, &ResolverConfig::default()));
        assert_eq!(report.totals.nodes, 2);
        assert_eq!(report.totals.resolved, 1);
        assert_eq!(report.totals.malformed, 1);
        assert!(report.rows[0].error.is_some());
        assert_eq!(report.rows[1].urn.as_deref(), Some("urn:ddi:a:M.m:1.0.0"));

        let text = render_text(&report);
        assert_eq!(
            text,
            "[0]\tM\turn:ddi:a:M.m:1.0.0\n2 nodes, 1 resolved, 1 malformed, 0 duplicate groups\n"
        );
    }
}
