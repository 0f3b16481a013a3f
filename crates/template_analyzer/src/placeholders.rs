//! Placeholder values for mock data leaves.
//!
//! The [`PlaceholderPolicy::NameAware`] policy walks [`NAME_RULES`] from top to
//! bottom and takes the first rule with a fragment matching the leaf name.
//! Fragments cover English and Spanish field names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "placeholders_tests.rs"]
mod tests;

/// Placeholder used for every leaf that no rule recognizes.
pub const DEFAULT_PLACEHOLDER: &str = "Example Value";

/// How leaf values of the mock data object are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderPolicy {
    /// Every leaf is [`DEFAULT_PLACEHOLDER`].
    Constant,
    /// Leaves are typed by what their name looks like (`email`, `edad`, ...).
    #[default]
    NameAware,
}

impl PlaceholderPolicy {
    /// Returns the placeholder for a leaf with the given name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use template_analyzer::PlaceholderPolicy;
    /// use serde_json::json;
    ///
    /// assert_eq!(PlaceholderPolicy::Constant.placeholder_for("email"), json!("Example Value"));
    /// assert_eq!(PlaceholderPolicy::NameAware.placeholder_for("email"), json!("user@example.com"));
    /// assert_eq!(PlaceholderPolicy::NameAware.placeholder_for("edad"), json!(30));
    /// ```
    pub fn placeholder_for(&self, leaf: &str) -> Value {
        match self {
            PlaceholderPolicy::Constant => Value::from(DEFAULT_PLACEHOLDER),
            PlaceholderPolicy::NameAware => NAME_RULES
                .iter()
                .find(|rule| rule.matches(leaf))
                .map(|rule| rule.placeholder.to_value())
                .unwrap_or_else(|| Value::from(DEFAULT_PLACEHOLDER)),
        }
    }
}

/// A fragment of a leaf name.
#[derive(Debug, Clone, Copy)]
enum Fragment {
    /// Anywhere in the lowercased name.
    Contains(&'static str),
    /// A whole word of the name, split on separators and camelCase humps.
    Word(&'static str),
}

#[derive(Debug, Clone, Copy)]
enum Placeholder {
    Text(&'static str),
    Integer(i64),
    Decimal(f64),
}

impl Placeholder {
    fn to_value(self) -> Value {
        match self {
            Placeholder::Text(text) => Value::from(text),
            Placeholder::Integer(number) => Value::from(number),
            Placeholder::Decimal(number) => Value::from(number),
        }
    }
}

#[derive(Debug)]
struct NameRule {
    fragments: &'static [Fragment],
    placeholder: Placeholder,
}

impl NameRule {
    fn matches(&self, leaf: &str) -> bool {
        let lowered = leaf.to_lowercase();
        let words = split_words(leaf);

        self.fragments.iter().any(|fragment| match fragment {
            Fragment::Contains(needle) => lowered.contains(needle),
            Fragment::Word(word) => words.iter().any(|candidate| candidate == word),
        })
    }
}

use Fragment::{Contains, Word};

/// Ordered lookup table; the first matching rule wins.
static NAME_RULES: &[NameRule] = &[
    NameRule {
        fragments: &[Contains("email"), Contains("correo"), Word("mail")],
        placeholder: Placeholder::Text("user@example.com"),
    },
    NameRule {
        fragments: &[
            Contains("phone"),
            Contains("telefono"),
            Contains("teléfono"),
            Contains("mobile"),
            Contains("celular"),
        ],
        placeholder: Placeholder::Text("+1 555 0100"),
    },
    NameRule {
        fragments: &[
            Word("url"),
            Contains("link"),
            Contains("website"),
            Contains("enlace"),
        ],
        placeholder: Placeholder::Text("https://example.com"),
    },
    NameRule {
        fragments: &[
            Contains("address"),
            Contains("direccion"),
            Contains("dirección"),
        ],
        placeholder: Placeholder::Text("123 Main Street"),
    },
    NameRule {
        fragments: &[Contains("city"), Contains("ciudad")],
        placeholder: Placeholder::Text("Springfield"),
    },
    NameRule {
        fragments: &[Contains("country"), Contains("pais"), Contains("país")],
        placeholder: Placeholder::Text("United States"),
    },
    NameRule {
        fragments: &[Word("date"), Contains("fecha")],
        placeholder: Placeholder::Text("2024-01-15"),
    },
    NameRule {
        fragments: &[Contains("username"), Contains("usuario")],
        placeholder: Placeholder::Text("johndoe"),
    },
    NameRule {
        fragments: &[Contains("name"), Contains("nombre")],
        placeholder: Placeholder::Text("John Doe"),
    },
    NameRule {
        fragments: &[Word("age"), Word("edad")],
        placeholder: Placeholder::Integer(30),
    },
    NameRule {
        fragments: &[Contains("title"), Contains("titulo"), Contains("título")],
        placeholder: Placeholder::Text("Example Title"),
    },
    NameRule {
        fragments: &[
            Contains("description"),
            Contains("descripcion"),
            Contains("descripción"),
        ],
        placeholder: Placeholder::Text("Example description text"),
    },
    NameRule {
        fragments: &[
            Contains("price"),
            Contains("precio"),
            Contains("amount"),
            Contains("monto"),
            Contains("total"),
            Contains("importe"),
            Contains("cost"),
        ],
        placeholder: Placeholder::Decimal(99.99),
    },
    NameRule {
        fragments: &[
            Contains("quantity"),
            Contains("cantidad"),
            Word("count"),
            Word("qty"),
        ],
        placeholder: Placeholder::Integer(3),
    },
    NameRule {
        fragments: &[Contains("company"), Contains("empresa")],
        placeholder: Placeholder::Text("Example Corp"),
    },
    NameRule {
        fragments: &[Word("id")],
        placeholder: Placeholder::Integer(1001),
    },
];

/// Splits `userAge`, `user_age` and `user-age` into `["user", "age"]`.
fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut previous_lower = false;

    for ch in name.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous_lower = false;
            continue;
        }

        if ch.is_uppercase() && previous_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        previous_lower = ch.is_lowercase() || ch.is_numeric();
        current.extend(ch.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
