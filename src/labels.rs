use std::collections::HashMap;

/// Map each label to the 0-based index of the line that defines it.
///
/// A line defines a label when its first whitespace-delimited token ends in
/// `:`. Every line counts toward the index, label or not, so the positions
/// refer to whichever stream is passed in. A repeated label keeps its last
/// position.
pub fn label_positions<S: AsRef<str>>(lines: &[S]) -> HashMap<String, usize> {
    let mut labels = HashMap::new();
    for (idx, line) in lines.iter().enumerate() {
        let Some(word) = line.as_ref().split_whitespace().next() else { continue };
        if let Some(name) = word.strip_suffix(':') {
            labels.insert(name.to_string(), idx);
        }
    }
    labels
}
