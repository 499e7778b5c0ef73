#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Entry {
    pub text: String,
    pub value: String,
}

impl Entry {
    pub fn new(text: &str, value: &str) -> Entry {
        return Entry {
            text: text.to_string(),
            value: value.to_string(),
        };
    }

    /// Most prompts submit exactly what they display, but `text` and `value`
    /// are kept separate so they are free to diverge.
    pub fn verbatim(prompt: &str) -> Entry {
        return Entry::new(prompt, prompt);
    }
}

/// Ordered, immutable set of example prompts. Built once and handed to the
/// view layer; position in the catalog is the only identifier an entry has.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    pub fn new(entries: Vec<Entry>) -> Catalog {
        return Catalog { entries };
    }

    pub fn empty() -> Catalog {
        return Catalog::new(vec![]);
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        return self.entries.get(index);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        return self.entries.iter();
    }
}

impl Default for Catalog {
    fn default() -> Catalog {
        return Catalog::new(vec![
            Entry::verbatim("Test me on Azure Data Fundamentals"),
            Entry::verbatim("What is a data warehouse?"),
            // The trailing space is part of the prompt as submitted.
            Entry::verbatim("What is an example of batch processing? "),
            Entry::verbatim("What are the different Azure Cosmos DB APIs?"),
            Entry::verbatim("What is the purpose of keys in a relational database?"),
            Entry::verbatim("How does a relational database eliminate duplicate data values?"),
            Entry::verbatim("What are the core concepts of data modeling?"),
        ]);
    }
}
