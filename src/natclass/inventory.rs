//! Natural-class inventory - the named segment sets a run iterates over
//!
//! The built-in inventory covers the Quechua laryngeal study. A TOML file can
//! replace it for other languages.

use serde::{Deserialize, Serialize};

use crate::core::error::{PhonoError, Result};
use crate::core::types::SegmentSet;

/// A named natural class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturalClass {
    pub name: String,
    pub segments: SegmentSet,
    /// Included when no explicit class selection is made
    pub default_run: bool,
}

impl NaturalClass {
    pub fn new(name: impl Into<String>, segments: SegmentSet) -> Self {
        Self {
            name: name.into(),
            segments,
            default_run: true,
        }
    }

    /// Defined for reference but skipped by default runs
    pub fn supplementary(name: impl Into<String>, segments: SegmentSet) -> Self {
        Self {
            default_run: false,
            ..Self::new(name, segments)
        }
    }
}

/// Ordered collection of natural classes
#[derive(Debug, Clone, Default)]
pub struct ClassInventory {
    classes: Vec<NaturalClass>,
}

impl ClassInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Quechua inventory, in study order
    pub fn quechua() -> Self {
        let asps = SegmentSet::from_listing("pʰ tʰ kʰ ʧʰ qʰ");
        let ejecs = SegmentSet::from_listing("p' t' k' ʧ' q'");
        let plains = SegmentSet::from_listing("p t k ʧ q");
        let nasals = SegmentSet::from_listing("m n ŋ ɲ ɴ");
        let uvulars = SegmentSet::from_listing("q q' qʰ ɴ x");
        let velars = SegmentSet::from_listing("k k' kʰ ŋ");
        let approxs = SegmentSet::from_listing("l r ʎ j w");
        let frics = SegmentSet::from_listing("s ʃ x h");
        let affricates = SegmentSet::from_listing("ʧ ʧ' ʧʰ");
        let sibs = SegmentSet::from_listing("s ʃ");
        let stridents = sibs.union(&affricates);
        let labstops = SegmentSet::from_listing("p p' pʰ");
        let liqs = SegmentSet::from_listing("l r ʎ");
        let h = SegmentSet::from_listing("h");
        let laryngeals = asps.union(&ejecs);

        let mut inventory = Self::new();
        inventory.add(NaturalClass::new("aspirates", asps));
        inventory.add(NaturalClass::new("ejectives", ejecs));
        inventory.add(NaturalClass::new("aspirates_ejectives", laryngeals.clone()));
        inventory.add(NaturalClass::new("plain_stops", plains));
        inventory.add(NaturalClass::new("nasals", nasals));
        inventory.add(NaturalClass::new("uvulars", uvulars));
        inventory.add(NaturalClass::new("velars", velars));
        inventory.add(NaturalClass::new("liquids", liqs));
        inventory.add(NaturalClass::new("fricatives", frics));
        inventory.add(NaturalClass::new("affricates", affricates));
        inventory.add(NaturalClass::new("h", h.clone()));
        inventory.add(NaturalClass::new("laryngeals_h", laryngeals.union(&h)));

        inventory.add(NaturalClass::supplementary("stridents", stridents));
        inventory.add(NaturalClass::supplementary("sibilants", sibs));
        inventory.add(NaturalClass::supplementary("labial_stops", labstops));
        inventory.add(NaturalClass::supplementary("approximants", approxs));

        inventory
    }

    pub fn add(&mut self, class: NaturalClass) {
        self.classes.push(class);
    }

    pub fn get(&self, name: &str) -> Option<&NaturalClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn all(&self) -> &[NaturalClass] {
        &self.classes
    }

    /// Classes flagged for default runs
    pub fn default_selection(&self) -> Vec<&NaturalClass> {
        self.classes.iter().filter(|c| c.default_run).collect()
    }

    /// Resolve a list of class names; an empty list means the default selection
    ///
    /// Unknown names are skipped with a warning. Selecting nothing at all is an
    /// error.
    pub fn select(&self, names: &[String]) -> Result<Vec<&NaturalClass>> {
        if names.is_empty() {
            return Ok(self.default_selection());
        }

        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            match self.get(name) {
                Some(class) => selected.push(class),
                None => tracing::warn!(class = %name, "unknown natural class, skipping"),
            }
        }

        if selected.is_empty() {
            return Err(PhonoError::InvalidConfig(format!(
                "none of the requested classes exist: {}",
                names.join(", ")
            )));
        }
        Ok(selected)
    }

    /// Load an inventory from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse an inventory from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let toml_data: TomlClasses =
            toml::from_str(content).map_err(|e| PhonoError::ClassFile(e.to_string()))?;

        let mut inventory = Self::new();
        for class in toml_data.classes {
            if class.name.trim().is_empty() {
                return Err(PhonoError::ClassFile("class with an empty name".into()));
            }
            if inventory.get(&class.name).is_some() {
                return Err(PhonoError::ClassFile(format!(
                    "duplicate class name: {}",
                    class.name
                )));
            }
            inventory.add(class.into_class());
        }
        Ok(inventory)
    }
}

/// TOML representation of an inventory file
#[derive(Debug, Deserialize)]
struct TomlClasses {
    classes: Vec<TomlClass>,
}

/// TOML representation of a single class
#[derive(Debug, Deserialize)]
struct TomlClass {
    name: String,
    segments: Vec<String>,
    #[serde(default = "default_true")]
    default_run: bool,
}

fn default_true() -> bool {
    true
}

impl TomlClass {
    fn into_class(self) -> NaturalClass {
        NaturalClass {
            name: self.name,
            segments: self.segments.into(),
            default_run: self.default_run,
        }
    }
}
