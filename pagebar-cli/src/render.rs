use pagebar_core::PageState;

/// Text form of the pagination bar: first/previous controls, leading
/// pages, the current page in brackets, trailing pages, next/last.
/// Controls that the original view disables at the boundaries are
/// simply left out here.
pub fn page_bar<T>(state: &PageState<'_, T>) -> String {
    let mut tokens = Vec::new();
    if !state.at_first_page() {
        tokens.push("<<".to_string());
        tokens.push("<".to_string());
    }
    for page in &state.leading {
        tokens.push(page.to_string());
    }
    tokens.push(format!("[{}]", state.current_page));
    for page in &state.trailing {
        tokens.push(page.to_string());
    }
    if !state.at_last_page() {
        tokens.push(">".to_string());
        tokens.push(">>".to_string());
    }
    tokens.join(" ")
}
