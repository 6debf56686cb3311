//! The Thirukkural entity tree.
//!
//! A strict four-level containment hierarchy: a [`Corpus`] holds Books
//! (Paals), a [`Book`] holds Sections (Iyals), a [`Section`] holds Chapters
//! (Adhigarams), and a [`Chapter`] holds the leaf [`Record`]s (Kurals).
//! Ordering is significant at every level; records carry sequential numbers.
//!
//! Serde attributes map the fragment JSON wire keys (`paals`, `iyals`,
//! `adhigarams`, `kurals`, `tamil`, `adhigaramName`) onto the domain names
//! used here.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A display language of the corpus.
///
/// Tamil is the primary script (the couplets themselves); English and Hindi
/// carry translations and alternative display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// Tamil, the primary script.
    Ta,
    /// English.
    En,
    /// Hindi.
    Hi,
}

impl Lang {
    /// Returns the two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Ta => "ta",
            Self::En => "en",
            Self::Hi => "hi",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ta" => Ok(Self::Ta),
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            other => Err(format!("unknown language '{other}' (expected ta, en, or hi)")),
        }
    }
}

/// Text in all three corpus languages.
///
/// Used both for display names (book, section, chapter) and for per-record
/// translations. The `ta` field for a record's translations holds the modern
/// prose rendering, distinct from the couplet itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangText {
    /// Tamil text.
    #[serde(default)]
    pub ta: String,
    /// English text.
    #[serde(default)]
    pub en: String,
    /// Hindi text.
    #[serde(default)]
    pub hi: String,
}

impl LangText {
    /// Returns the text for the given language.
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ta => &self.ta,
            Lang::En => &self.en,
            Lang::Hi => &self.hi,
        }
    }

    /// Returns all three values in a fixed order (ta, en, hi).
    pub fn values(&self) -> [&str; 3] {
        [&self.ta, &self.en, &self.hi]
    }

    /// Checks whether every language's text is empty.
    pub fn is_empty(&self) -> bool {
        self.ta.is_empty() && self.en.is_empty() && self.hi.is_empty()
    }
}

/// A single commentary entry on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    /// Name of the commentator.
    pub author: String,
    /// The commentary text.
    pub text: String,
}

/// Commentary lists grouped by language, each in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentaries {
    /// Tamil commentaries.
    #[serde(default)]
    pub ta: Vec<Commentary>,
    /// English commentaries.
    #[serde(default)]
    pub en: Vec<Commentary>,
}

/// A leaf unit of the corpus: one Kural couplet.
///
/// `number` is unique across the whole corpus and stable across merges.
/// Records are created once during corpus construction and never mutated
/// afterwards; `chapter_name` is a convenience copy of the enclosing
/// chapter's name so lookups need not walk the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique positive identifier, sequential across the corpus.
    pub number: u32,
    /// The original couplet in Tamil script. May contain internal line
    /// breaks; line order is significant.
    #[serde(rename = "tamil")]
    pub body: String,
    /// Translations and the modern Tamil prose rendering.
    pub translations: LangText,
    /// Display name of the enclosing chapter, copied onto the record.
    #[serde(rename = "adhigaramName", default)]
    pub chapter_name: LangText,
    /// Commentaries grouped by language.
    #[serde(default)]
    pub commentaries: Commentaries,
}

/// A Chapter (Adhigaram): a named, ordered run of ten records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter display name per language.
    pub name: LangText,
    /// Records in source order. Order is semantically meaningful.
    #[serde(rename = "kurals")]
    pub records: Vec<Record>,
}

/// A Section (Iyal): a named, ordered list of chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section display name per language.
    pub name: LangText,
    /// Chapters in source order.
    #[serde(rename = "adhigarams")]
    pub chapters: Vec<Chapter>,
}

/// A Book (Paal): a named, ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Book display name per language.
    pub name: LangText,
    /// Sections in source order.
    #[serde(rename = "iyals")]
    pub sections: Vec<Section>,
}

/// The root of the entity tree: an ordered list of books.
///
/// The corpus exclusively owns the whole tree. Flattened views borrow from
/// it and must be recomputed whenever the corpus is rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    /// Books in source order.
    #[serde(rename = "paals")]
    pub books: Vec<Book>,
}

impl Corpus {
    /// Copies each chapter's name onto any contained record whose
    /// `chapter_name` is entirely empty.
    ///
    /// Fragment documents usually stamp the chapter name onto every record
    /// already; this fills the gap for those that do not, so the flattened
    /// view never needs to walk back up the tree.
    pub fn stamp_chapter_names(&mut self) {
        for book in &mut self.books {
            for section in &mut book.sections {
                for chapter in &mut section.chapters {
                    for record in &mut chapter.records {
                        if record.chapter_name.is_empty() {
                            record.chapter_name = chapter.name.clone();
                        }
                    }
                }
            }
        }
    }

    /// Returns the total number of records across all books.
    pub fn record_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| &b.sections)
            .flat_map(|s| &s.chapters)
            .map(|c| c.records.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a record with the given number and no chapter name.
    fn bare_record(number: u32) -> Record {
        Record {
            number,
            body: format!("couplet {number}"),
            translations: LangText::default(),
            chapter_name: LangText::default(),
            commentaries: Commentaries::default(),
        }
    }

    #[test]
    fn test_lang_roundtrip() {
        for lang in [Lang::Ta, Lang::En, Lang::Hi] {
            assert_eq!(lang.code().parse::<Lang>().unwrap(), lang);
        }
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn test_lang_text_lookup() {
        let name = LangText {
            ta: "அறம்".into(),
            en: "Virtue".into(),
            hi: "धर्म".into(),
        };
        assert_eq!(name.get(Lang::En), "Virtue");
        assert_eq!(name.values(), ["அறம்", "Virtue", "धर्म"]);
        assert!(!name.is_empty());
        assert!(LangText::default().is_empty());
    }

    #[test]
    fn test_deserialize_wire_keys() {
        let json = r#"{
            "paals": [{
                "name": {"ta": "அறத்துப்பால்", "en": "Virtue", "hi": "धर्म"},
                "iyals": [{
                    "name": {"ta": "பாயிரவியல்", "en": "Prologue", "hi": "प्रस्तावना"},
                    "adhigarams": [{
                        "name": {"ta": "கடவுள் வாழ்த்து", "en": "Praise of God", "hi": "ईश्वर स्तुति"},
                        "kurals": [{
                            "number": 1,
                            "tamil": "அகர முதல எழுத்தெல்லாம்",
                            "adhigaramName": {"ta": "கடவுள் வாழ்த்து", "en": "Praise of God", "hi": "ईश्वर स्तुति"},
                            "translations": {"ta": "...", "en": "A leads letters", "hi": "..."},
                            "commentaries": {"ta": [], "en": [{"author": "Pope", "text": "..."}]}
                        }]
                    }]
                }]
            }]
        }"#;
        let corpus: Corpus = serde_json::from_str(json).unwrap();
        assert_eq!(corpus.books.len(), 1);
        let record = &corpus.books[0].sections[0].chapters[0].records[0];
        assert_eq!(record.number, 1);
        assert_eq!(record.body, "அகர முதல எழுத்தெல்லாம்");
        assert_eq!(record.chapter_name.en, "Praise of God");
        assert_eq!(record.commentaries.en[0].author, "Pope");
        assert_eq!(corpus.record_count(), 1);
    }

    #[test]
    fn test_deserialize_missing_optionals() {
        // Records without adhigaramName or commentaries must still parse.
        let json = r#"{
            "paals": [{
                "name": {"en": "Virtue"},
                "iyals": [{
                    "name": {"en": "Prologue"},
                    "adhigarams": [{
                        "name": {"en": "Praise of God"},
                        "kurals": [{
                            "number": 2,
                            "tamil": "கற்றதனால்",
                            "translations": {"en": "What profit..."}
                        }]
                    }]
                }]
            }]
        }"#;
        let corpus: Corpus = serde_json::from_str(json).unwrap();
        let record = &corpus.books[0].sections[0].chapters[0].records[0];
        assert!(record.chapter_name.is_empty());
        assert!(record.commentaries.ta.is_empty());
    }

    #[test]
    fn test_stamp_chapter_names() {
        let mut corpus = Corpus {
            books: vec![Book {
                name: LangText::default(),
                sections: vec![Section {
                    name: LangText::default(),
                    chapters: vec![Chapter {
                        name: LangText {
                            ta: "கடவுள் வாழ்த்து".into(),
                            en: "Praise of God".into(),
                            hi: String::new(),
                        },
                        records: vec![bare_record(1)],
                    }],
                }],
            }],
        };
        corpus.stamp_chapter_names();
        let record = &corpus.books[0].sections[0].chapters[0].records[0];
        assert_eq!(record.chapter_name.en, "Praise of God");
    }

    #[test]
    fn test_stamp_keeps_existing_names() {
        let mut record = bare_record(1);
        record.chapter_name.en = "Original".into();
        let mut corpus = Corpus {
            books: vec![Book {
                name: LangText::default(),
                sections: vec![Section {
                    name: LangText::default(),
                    chapters: vec![Chapter {
                        name: LangText {
                            en: "Replacement".into(),
                            ..LangText::default()
                        },
                        records: vec![record],
                    }],
                }],
            }],
        };
        corpus.stamp_chapter_names();
        let record = &corpus.books[0].sections[0].chapters[0].records[0];
        assert_eq!(record.chapter_name.en, "Original");
    }
}
