// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Command languages
//!
//! Forms carry the short id, pages show the display name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language a command is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// "BDScript"
    BdScript,
    /// "Javascript (ES5+BD.js)"
    JavaScript,
    /// "BDScript Unstable"
    BdScriptUnstable,
    /// "BDScript 2"
    #[default]
    BdScript2,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::BdScript,
        Language::JavaScript,
        Language::BdScriptUnstable,
        Language::BdScript2,
    ];

    /// Short id sent in the command form
    pub fn id(&self) -> &'static str {
        match self {
            Language::BdScript => "0",
            Language::JavaScript => "1",
            Language::BdScriptUnstable => "2",
            Language::BdScript2 => "3",
        }
    }

    /// Name as shown by the web app
    pub fn name(&self) -> &'static str {
        match self {
            Language::BdScript => "BDScript",
            Language::JavaScript => "Javascript (ES5+BD.js)",
            Language::BdScriptUnstable => "BDScript Unstable",
            Language::BdScript2 => "BDScript 2",
        }
    }

    /// Exact name lookup; unknown names fall back to BDScript 2
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|lang| lang.name() == name)
            .unwrap_or_default()
    }

    /// Id lookup
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.id() == id)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Short id for a language display name, `"3"` when the name is not known
pub fn id_from_name(name: &str) -> &'static str {
    Language::from_name(name).id()
}
