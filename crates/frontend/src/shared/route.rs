use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Current path with query and fragment, like the browser's address bar
/// minus origin. Must be called under a `<Router>`.
pub fn use_current_path() -> Signal<String> {
    let location = use_location();
    Signal::derive(move || {
        join_path(
            &location.pathname.get(),
            &location.search.get(),
            &location.hash.get(),
        )
    })
}

pub fn join_path(pathname: &str, search: &str, hash: &str) -> String {
    let search = search.trim_start_matches('?');
    let hash = hash.trim_start_matches('#');

    let mut path = if pathname.is_empty() {
        "/".to_string()
    } else {
        pathname.to_string()
    };
    if !search.is_empty() {
        path.push('?');
        path.push_str(search);
    }
    if !hash.is_empty() {
        path.push('#');
        path.push_str(hash);
    }
    path
}
