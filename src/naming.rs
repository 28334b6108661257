//! Entity naming variants
//!
//! Every other component consumes entity names through [`NameSet`], which is
//! computed exactly once per generation run. The twelve variants cover the
//! singular and plural of pascal, camel, snake, kebab, title and lower case.

/// All naming variants derived from one entity name
///
/// The source name may arrive in pascal case (`InvoiceItem`) or separated
/// form (`invoice_item`, `invoice-item`); word boundaries are recovered from
/// both. Pluralization applies to the final word only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet {
    /// `InvoiceItem`
    pub pascal: String,
    /// `InvoiceItems`
    pub plural_pascal: String,
    /// `invoiceItem`
    pub camel: String,
    /// `invoiceItems`
    pub plural_camel: String,
    /// `invoice_item`
    pub snake: String,
    /// `invoice_items`
    pub plural_snake: String,
    /// `invoice-item`
    pub kebab: String,
    /// `invoice-items`
    pub plural_kebab: String,
    /// `Invoice Item`
    pub title: String,
    /// `Invoice Items`
    pub plural_title: String,
    /// `invoiceitem`
    pub lower: String,
    /// `invoiceitems`
    pub plural_lower: String,
}

impl NameSet {
    /// Derive every variant from an entity name
    ///
    /// Returns `None` when the name contains no alphanumeric characters.
    pub fn derive(entity: &str) -> Option<Self> {
        let words = split_words(entity);
        if words.is_empty() {
            return None;
        }
        let mut plural_words = words.clone();
        if let Some(last) = plural_words.last_mut() {
            *last = pluralize(last);
        }
        Some(NameSet {
            pascal: pascal_join(&words),
            plural_pascal: pascal_join(&plural_words),
            camel: camel_join(&words),
            plural_camel: camel_join(&plural_words),
            snake: words.join("_"),
            plural_snake: plural_words.join("_"),
            kebab: words.join("-"),
            plural_kebab: plural_words.join("-"),
            title: title_join(&words),
            plural_title: title_join(&plural_words),
            lower: words.concat(),
            plural_lower: plural_words.concat(),
        })
    }

    /// Table identifier used by the schema introspector (plural snake case)
    pub fn table(&self) -> &str {
        &self.plural_snake
    }
}

/// Split an entity name into lowercase words
///
/// Boundaries are underscores, hyphens, whitespace, and lower→upper case
/// transitions. Non-alphanumeric characters are dropped.
fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in name.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if !c.is_ascii_alphanumeric() {
            continue;
        }
        if c.is_ascii_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        current.push(c.to_ascii_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn pascal_join(words: &[String]) -> String {
    words.iter().map(|w| capitalize(w)).collect()
}

fn camel_join(words: &[String]) -> String {
    let mut out = String::new();
    for (i, w) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(w);
        } else {
            out.push_str(&capitalize(w));
        }
    }
    out
}

fn title_join(words: &[String]) -> String {
    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Naive English pluralization of a single lowercase word
///
/// s/x/z/ch/sh take `es`, consonant+y becomes `ies`, everything else
/// appends `s`. Already-plural inputs are left alone when they end in `s`.
fn pluralize(word: &str) -> String {
    if word.ends_with("ies") || (word.ends_with('s') && !word.ends_with("ss")) {
        return word.to_string();
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        let before_y = stem.chars().last();
        if matches!(before_y, Some(c) if !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_variants() {
        let n = NameSet::derive("Invoice").unwrap();
        assert_eq!(n.pascal, "Invoice");
        assert_eq!(n.plural_pascal, "Invoices");
        assert_eq!(n.camel, "invoice");
        assert_eq!(n.plural_camel, "invoices");
        assert_eq!(n.snake, "invoice");
        assert_eq!(n.plural_snake, "invoices");
        assert_eq!(n.kebab, "invoice");
        assert_eq!(n.plural_kebab, "invoices");
        assert_eq!(n.title, "Invoice");
        assert_eq!(n.plural_title, "Invoices");
        assert_eq!(n.lower, "invoice");
        assert_eq!(n.plural_lower, "invoices");
    }

    #[test]
    fn test_multi_word_variants() {
        let n = NameSet::derive("InvoiceItem").unwrap();
        assert_eq!(n.pascal, "InvoiceItem");
        assert_eq!(n.plural_pascal, "InvoiceItems");
        assert_eq!(n.camel, "invoiceItem");
        assert_eq!(n.plural_camel, "invoiceItems");
        assert_eq!(n.snake, "invoice_item");
        assert_eq!(n.plural_snake, "invoice_items");
        assert_eq!(n.kebab, "invoice-item");
        assert_eq!(n.plural_kebab, "invoice-items");
        assert_eq!(n.title, "Invoice Item");
        assert_eq!(n.lower, "invoiceitem");
    }

    #[test]
    fn test_snake_input_recovers_boundaries() {
        let a = NameSet::derive("invoice_item").unwrap();
        let b = NameSet::derive("InvoiceItem").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pluralize_rules() {
        assert_eq!(pluralize("invoice"), "invoices");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("batch"), "batches");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("quiz"), "quizes");
        assert_eq!(pluralize("address"), "addresses");
        // already plural stays put
        assert_eq!(pluralize("invoices"), "invoices");
        assert_eq!(pluralize("categories"), "categories");
    }

    #[test]
    fn test_table_identifier() {
        let n = NameSet::derive("InvoiceItem").unwrap();
        assert_eq!(n.table(), "invoice_items");
    }

    #[test]
    fn test_rejects_empty_and_symbols() {
        assert!(NameSet::derive("").is_none());
        assert!(NameSet::derive("___").is_none());
        assert!(NameSet::derive("!!!").is_none());
    }
}
