/// Trim every line and drop the ones left empty, preserving order.
pub fn clean<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let t = line.as_ref().trim();
            (!t.is_empty()).then(|| t.to_string())
        })
        .collect()
}
