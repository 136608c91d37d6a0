use std::collections::BTreeMap;

use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

static SNIPPET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/snippets");

/// Key of the pool entry that merges every other language.
pub const MIXED_KEY: &str = "mixed";

/// Languages that ship with an embedded snippet set
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    Java,
    Csharp,
    Cpp,
    Php,
    Typescript,
    Swift,
    Go,
    Kotlin,
    Mixed,
}

impl Language {
    pub fn all() -> &'static [Language] {
        Language::value_variants()
    }

    /// Pool key, e.g. `csharp`
    pub fn key(&self) -> String {
        self.to_string()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Javascript => "JavaScript",
            Language::Java => "Java",
            Language::Csharp => "C#",
            Language::Cpp => "C++",
            Language::Php => "PHP",
            Language::Typescript => "TypeScript",
            Language::Swift => "Swift",
            Language::Go => "Go",
            Language::Kotlin => "Kotlin",
            Language::Mixed => "Mixed",
        }
    }
}

/// On-disk shape of one embedded snippet file
#[derive(Deserialize, Clone, Debug)]
pub struct SnippetSet {
    pub name: String,
    pub snippets: Vec<String>,
}

/// Immutable mapping from language key to its ordered snippets
#[derive(Debug, Clone, Default)]
pub struct SnippetPool {
    sets: BTreeMap<String, Vec<String>>,
}

impl SnippetPool {
    /// Load every embedded `*.json` snippet file.
    pub fn load() -> Result<Self> {
        let sets = SNIPPET_DIR
            .files()
            .filter(|f| f.path().extension().is_some_and(|ext| ext == "json"))
            .map(|file| {
                let name = file.path().display().to_string();
                let contents = file
                    .contents_utf8()
                    .ok_or_else(|| Error::Encoding { file: name.clone() })?;
                serde_json::from_str::<SnippetSet>(contents)
                    .map_err(|source| Error::Dataset { file: name, source })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_sets(sets)
    }

    pub fn from_sets(sets: impl IntoIterator<Item = SnippetSet>) -> Result<Self> {
        let mut pool = BTreeMap::new();

        for set in sets {
            validate(&set)?;
            if pool.contains_key(&set.name) {
                return Err(Error::DuplicateLanguage(set.name));
            }
            debug!(language = %set.name, snippets = set.snippets.len(), "loaded snippet set");
            pool.insert(set.name, set.snippets);
        }

        if !pool.contains_key(MIXED_KEY) {
            let mixed = pool
                .values()
                .flatten()
                .unique()
                .cloned()
                .collect::<Vec<String>>();
            pool.insert(MIXED_KEY.to_string(), mixed);
        }

        Ok(Self { sets: pool })
    }

    /// Snippets for `key`; an unknown key has none.
    pub fn snippets(&self, key: &str) -> &[String] {
        self.sets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}

fn validate(set: &SnippetSet) -> Result<()> {
    let invalid = |index, reason| Error::InvalidSnippet {
        language: set.name.clone(),
        index,
        reason,
    };

    for (index, snippet) in set.snippets.iter().enumerate() {
        if snippet.is_empty() {
            return Err(invalid(index, "is empty"));
        }
        if snippet.contains('\t') {
            return Err(invalid(index, "contains a tab"));
        }
        if snippet.contains(['\n', '\r']) {
            return Err(invalid(index, "spans more than one line"));
        }
        if snippet.trim() != snippet {
            return Err(invalid(index, "has surrounding whitespace"));
        }
        if set.snippets[..index].contains(snippet) {
            return Err(invalid(index, "is a duplicate"));
        }
    }

    Ok(())
}
