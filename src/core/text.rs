/// 逐行移除子字串並修剪行尾空白
#[derive(Debug, Clone, Default)]
pub struct TextProcessor;

impl TextProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Removes every occurrence of `target` from each `\n`-separated line,
    /// trims trailing whitespace and joins the lines back with `\n`.
    ///
    /// After each removal the line is rescanned from the start, so occurrences
    /// formed by joining the remaining halves are removed too. An empty
    /// `target` removes nothing. A final `\n` in `text` does not produce an
    /// extra empty line.
    pub fn remove_substring_from_lines(&self, text: &str, target: &str) -> String {
        let mut total_removed = 0usize;

        let lines: Vec<String> = text
            .split_terminator('\n')
            .map(|line| {
                let (cleaned, removed) = strip_line(line, target);
                total_removed += removed;
                cleaned
            })
            .collect();

        tracing::debug!(
            "Processed {} lines, removed {} occurrences of '{}'",
            lines.len(),
            total_removed,
            target
        );

        lines.join("\n")
    }
}

fn strip_line(line: &str, target: &str) -> (String, usize) {
    let mut line = line.to_string();
    let mut removed = 0;

    if !target.is_empty() {
        while let Some(pos) = line.find(target) {
            line.replace_range(pos..pos + target.len(), "");
            removed += 1;
            tracing::info!("Removed occurrence of substring '{}' from line.", target);
        }
    }

    let trimmed_len = line.trim_end().len();
    line.truncate(trimmed_len);
    (line, removed)
}

pub fn remove_substring(text: &str, target: &str) -> String {
    TextProcessor::new().remove_substring_from_lines(text, target)
}
