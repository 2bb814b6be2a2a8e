/// Склеивает CSS-классы в одну строку
///
/// Пустые фрагменты пропускаются, повторяющиеся классы остаются только
/// в первой позиции.
///
/// # Пример
/// ```rust
/// use datatable_ui::shared::class_names::cn;
///
/// let class = cn(&["table__cell", "", "flex table__cell"]);
/// assert_eq!(class, "table__cell flex");
/// ```
pub fn cn(parts: &[&str]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for class in parts.iter().flat_map(|part| part.split_whitespace()) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}
