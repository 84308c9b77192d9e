use wordnik_types::ViewData;

/// Text of the synonym deck, one card per synonym
pub fn render_deck(view: &ViewData, width: usize) -> String {
    let mut out = String::new();

    if view.count() == 0 {
        if view.query.is_empty() {
            out.push_str("Nothing found\n");
        } else {
            out.push_str(&format!("No synonyms for '{}'\n", view.query));
        }
    } else {
        let total = view.count();
        out.push_str(&format!("{}: {} synonym{}\n", view.query, total, plural(total)));

        for (i, card) in view.items().enumerate() {
            out.push_str(&format!("  [{}/{}] {}\n", i + 1, total, card.word));

            let definition = if card.definition_text.is_empty() {
                "(no definition)"
            } else {
                card.definition_text
            };
            let text = format!("{}: {}", card.query, definition);
            for line in wrap(&text, width) {
                out.push_str("        ");
                out.push_str(&line);
                out.push('\n');
            }
        }
    }

    // Play is only offered for an active search word
    if view.has_audio() && !view.query.is_empty() {
        out.push_str(&format!("  :play to hear '{}'\n", view.query));
    }

    out
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Greedy word wrap; words longer than `width` get a line of their own
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
