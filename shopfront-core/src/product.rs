//! Product, bundle and variant records as they arrive in the page payload.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Image shown when an item carries no images at all.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x600/f5f5f5/cccccc?text=No+Image";

/// Identifier of a variant or bundle.
///
/// The storefront backend emits ids as JSON numbers, older exports use
/// strings; both are kept in their textual form. Equality and ordering go by
/// the text, while the JSON type is remembered for [`ItemId::matches_json`].
#[derive(Debug, Clone)]
pub struct ItemId {
    text: String,
    numeric: bool,
}

impl ItemId {
    /// A string id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            text: id.into(),
            numeric: false,
        }
    }

    #[must_use]
    pub fn number(id: u64) -> Self {
        Self {
            text: id.to_string(),
            numeric: true,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether a raw JSON value is this id with the same JSON type: a numeric
    /// id never matches a string spelling of it, nor the other way round.
    #[must_use]
    pub fn matches_json(&self, value: &serde_json::Value) -> bool {
        match value {
            serde_json::Value::String(s) => !self.numeric && *s == self.text,
            serde_json::Value::Number(n) => self.numeric && n.to_string() == self.text,
            _ => false,
        }
    }
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for ItemId {}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for ItemId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ItemId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Scalar::deserialize(deserializer).map(|s| {
            let numeric = matches!(s, Scalar::Number(_));
            Self {
                text: s.into_string(),
                numeric,
            }
        })
    }
}

/// Prices are decimal strings, but numbers and nulls show up too.
fn price_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<Scalar>::deserialize(deserializer).map(|s| s.map(Scalar::into_string).unwrap_or_default())
}

/// Null strings are treated as empty.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Option::<Vec<Option<String>>>::deserialize(deserializer)
        .map(|list| list.unwrap_or_default().into_iter().flatten().collect())
}

/// One of the three named axes of variation a product may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSlot {
    Option1,
    Option2,
    Option3,
}

impl OptionSlot {
    pub const ALL: [Self; 3] = [Self::Option1, Self::Option2, Self::Option3];

    #[must_use]
    pub const fn name_key(self) -> &'static str {
        match self {
            Self::Option1 => "option1_name",
            Self::Option2 => "option2_name",
            Self::Option3 => "option3_name",
        }
    }

    #[must_use]
    pub const fn value_key(self) -> &'static str {
        match self {
            Self::Option1 => "option1_value",
            Self::Option2 => "option2_value",
            Self::Option3 => "option3_value",
        }
    }
}

/// A purchasable combination of option values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: ItemId,
    /// Decimal string, e.g. `"15000.00"`.
    #[serde(default, deserialize_with = "price_text")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub option1_value: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub option2_value: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub option3_value: String,
}

impl Variant {
    /// Value this variant holds for `slot`; empty when undefined.
    #[must_use]
    pub fn value(&self, slot: OptionSlot) -> &str {
        match slot {
            OptionSlot::Option1 => &self.option1_value,
            OptionSlot::Option2 => &self.option2_value,
            OptionSlot::Option3 => &self.option3_value,
        }
    }
}

/// A named option axis together with the values offered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionAxis {
    pub slot: OptionSlot,
    pub name: String,
    pub values: Vec<String>,
}

/// Axes of a product, at most three.
pub type OptionAxes = SmallVec<[OptionAxis; 3]>;

/// A simple product, possibly with variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rich_description: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub images: Vec<String>,
    /// Flat price used when no variant price can be read.
    #[serde(default, deserialize_with = "price_text")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub option1_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub option2_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub option3_name: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl ProductRecord {
    /// Display name of `slot`; empty when the product does not use it.
    #[must_use]
    pub fn option_name(&self, slot: OptionSlot) -> &str {
        match slot {
            OptionSlot::Option1 => &self.option1_name,
            OptionSlot::Option2 => &self.option2_name,
            OptionSlot::Option3 => &self.option3_name,
        }
    }

    /// Slots with a non-empty name, in slot order.
    pub fn named_slots(&self) -> impl Iterator<Item = (OptionSlot, &str)> + '_ {
        OptionSlot::ALL
            .into_iter()
            .map(|slot| (slot, self.option_name(slot)))
            .filter(|(_, name)| !name.is_empty())
    }

    /// Number of option slots a complete selection has to fill.
    #[must_use]
    pub fn required_selections(&self) -> usize {
        self.named_slots().count()
    }

    /// Option rows to offer: distinct non-empty values per named slot, in
    /// first-seen order. Slots without any value are left out.
    #[must_use]
    pub fn option_axes(&self) -> OptionAxes {
        self.named_slots()
            .filter_map(|(slot, name)| {
                let mut values: Vec<String> = Vec::new();
                for variant in &self.variants {
                    let value = variant.value(slot);
                    if !value.is_empty() && !values.iter().any(|v| v == value) {
                        values.push(value.to_string());
                    }
                }
                (!values.is_empty()).then(|| OptionAxis {
                    slot,
                    name: name.to_string(),
                    values,
                })
            })
            .collect()
    }

    /// The single variant of a product that needs no selection.
    #[must_use]
    pub fn sole_variant(&self) -> Option<&Variant> {
        match self.variants.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

/// Display fields nested under a bundle price option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleDetails {
    #[serde(default, deserialize_with = "lenient_text")]
    pub public_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rich_description: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub images: Vec<String>,
}

/// A bundle price option: one price, no option slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRecord {
    pub id: ItemId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub public_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rich_description: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub images: Vec<String>,
    #[serde(default)]
    pub bundle: Option<BundleDetails>,
}

impl BundleRecord {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.bundle
            .as_ref()
            .map_or(self.public_name.as_str(), |b| b.public_name.as_str())
    }

    #[must_use]
    pub fn display_images(&self) -> &[String] {
        self.bundle
            .as_ref()
            .map_or(self.images.as_slice(), |b| b.images.as_slice())
    }

    #[must_use]
    pub fn display_description(&self) -> &str {
        self.bundle
            .as_ref()
            .map_or(self.rich_description.as_str(), |b| b.rich_description.as_str())
    }
}

/// Image list with the placeholder substituted for an empty one.
#[must_use]
pub fn gallery_images(images: &[String]) -> Vec<String> {
    if images.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        images.to_vec()
    }
}
