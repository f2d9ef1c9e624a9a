//! Template gallery data: ready-made example playbooks.
//!
//! The templates are embedded JSON fixtures; they seed the editor's
//! gallery and double as realistic graphs for the test suites.

use crate::{Result, model::Playbook};

/// A gallery entry wrapping an embedded playbook definition.
pub struct PlaybookTemplate {
    pub id: &'static str,
    pub description: &'static str,
    raw: &'static str,
}

impl PlaybookTemplate {
    /// Parses the embedded definition into a playbook.
    pub fn load(&self) -> Result<Playbook> {
        let playbook = Playbook::from_json(self.raw)?;
        playbook.validate()?;
        Ok(playbook)
    }
}

const TEMPLATES: [PlaybookTemplate; 3] = [
    PlaybookTemplate {
        id: "phishing_email_response",
        description: "Triage a reported phishing email: blocklist check, sender block, quarantine, analyst notification",
        raw: include_str!("../fixtures/phishing_email_response.json"),
    },
    PlaybookTemplate {
        id: "malware_containment",
        description: "Contain an EDR malware alert: hash enrichment, verdict gate, endpoint isolation, ticketing",
        raw: include_str!("../fixtures/malware_containment.json"),
    },
    PlaybookTemplate {
        id: "brute_force_lockdown",
        description: "Respond to a failed-login spike: time-window gate, firewall block, account lockout",
        raw: include_str!("../fixtures/brute_force_lockdown.json"),
    },
];

/// The static template catalog.
pub fn catalog() -> &'static [PlaybookTemplate] {
    &TEMPLATES
}
