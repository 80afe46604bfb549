//! FAQ commands.

use vetcare_site::faq::FaqIndex;

/// Search the FAQ; an empty term lists every entry.
pub fn search(term: &str) {
    let faq = FaqIndex::builtin();
    let entries = faq.search(term);

    if entries.is_empty() {
        println!("No FAQ entries match your search.");
        return;
    }

    for entry in &entries {
        println!("Q: {}", entry.question);
        println!("A: {}", entry.answer);
        println!();
    }
    println!("Showing {} of {} entries", entries.len(), faq.entries().len());
}
