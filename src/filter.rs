//! Filter compiler
//!
//! Rewrites operator-supplied search terms into fully-scoped, open-state
//! queries. Pure string work: one term in, one term out, original order
//! kept, no syntax validation of the result.

use crate::context::RepoContext;

/// Scope qualifiers recognized in a raw term. Matching is a case-sensitive
/// substring test, exactly as the platform search syntax spells them.
pub const SCOPE_QUALIFIERS: [&str; 4] = ["repo:", "owner:", "org:", "user:"];

/// Qualifier restricting a query to open items.
pub const OPEN_STATE_QUALIFIER: &str = "is:open";

/// Compile one term against the run's repository context.
///
/// An unscoped term gets the repository scope prepended; a term without
/// the open-state qualifier gets it appended. Terms already carrying both
/// come back unchanged.
pub fn compile_term(term: &str, repo: &RepoContext) -> String {
    let mut compiled = if SCOPE_QUALIFIERS.iter().any(|q| term.contains(q)) {
        term.to_string()
    } else {
        let mut scoped = repo.search_scope();
        if !term.is_empty() {
            scoped.push(' ');
            scoped.push_str(term);
        }
        scoped
    };

    if !compiled.contains(OPEN_STATE_QUALIFIER) {
        compiled.push(' ');
        compiled.push_str(OPEN_STATE_QUALIFIER);
    }

    compiled
}

/// Compile every term, preserving order and cardinality.
pub fn compile(terms: &[String], repo: &RepoContext) -> Vec<String> {
    terms.iter().map(|term| compile_term(term, repo)).collect()
}
