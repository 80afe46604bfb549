//! FAQ keyword search.

/// A frequently asked question.
#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    /// Extra match terms that don't appear verbatim in the text.
    pub keywords: Vec<String>,
}

impl FaqEntry {
    /// Case-insensitive substring match over question, answer, and
    /// keywords. `term` must already be lowercased and trimmed.
    fn matches(&self, term: &str) -> bool {
        term.is_empty()
            || self.question.to_lowercase().contains(term)
            || self.answer.to_lowercase().contains(term)
            || self.keywords.iter().any(|k| k.to_lowercase().contains(term))
    }
}

/// The clinic's FAQ list.
#[derive(Debug, Clone)]
pub struct FaqIndex {
    entries: Vec<FaqEntry>,
}

impl FaqIndex {
    /// The clinic's built-in FAQ entries.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    /// All entries, in display order.
    #[must_use]
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Entries matching the search term; all entries for an empty term.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&FaqEntry> {
        let term = term.trim().to_lowercase();
        self.entries.iter().filter(|e| e.matches(&term)).collect()
    }
}

fn entry(question: &str, answer: &str, keywords: &[&str]) -> FaqEntry {
    FaqEntry {
        question: question.to_owned(),
        answer: answer.to_owned(),
        keywords: keywords.iter().map(|&k| k.to_owned()).collect(),
    }
}

fn builtin_entries() -> Vec<FaqEntry> {
    vec![
        entry(
            "What are your opening hours?",
            "Monday to Friday 8:00-19:00, Saturday 9:00-14:00. Emergencies \
             are attended 24/7 by phone.",
            &["schedule", "open", "hours", "time"],
        ),
        entry(
            "Do I need an appointment for a consultation?",
            "Walk-ins are welcome, but booking an appointment guarantees \
             your time slot and shortens the wait.",
            &["booking", "appointment", "walk-in"],
        ),
        entry(
            "Which vaccines does my puppy need?",
            "The core schedule covers distemper, parvovirus, hepatitis, and \
             rabies, starting at six weeks. We'll tailor the plan during \
             your first visit.",
            &["vaccination", "puppy", "shots"],
        ),
        entry(
            "What should I do in an emergency?",
            "Call the emergency line immediately and, if possible, submit \
             the emergency form so the team can prepare before you arrive.",
            &["urgent", "emergency", "accident"],
        ),
        entry(
            "Which payment methods do you accept?",
            "Cash, debit, and all major credit cards. Online payment is not \
             available yet.",
            &["payment", "card", "cash", "price"],
        ),
        entry(
            "How often should my pet be dewormed?",
            "Adult dogs and cats every three months; puppies and kittens \
             follow a closer schedule that we set up at their first check.",
            &["deworming", "parasites", "worms"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_returns_everything() {
        let faq = FaqIndex::builtin();
        assert_eq!(faq.search("").len(), faq.entries().len());
    }

    #[test]
    fn test_search_matches_question_text() {
        let faq = FaqIndex::builtin();
        let hits = faq.search("opening hours");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_search_matches_keywords_not_in_text() {
        let faq = FaqIndex::builtin();
        let hits = faq.search("shots");
        assert_eq!(hits.len(), 1);
        assert!(hits.iter().all(|e| e.question.contains("vaccines")));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let faq = FaqIndex::builtin();
        assert_eq!(faq.search("PAYMENT").len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let faq = FaqIndex::builtin();
        assert!(faq.search("spaceship").is_empty());
    }
}
