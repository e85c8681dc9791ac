use leptos::prelude::*;

fn svg(body: &'static str) -> AnyView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" inner_html=body></svg>
    }
    .into_any()
}

pub fn icon(name: &str) -> AnyView {
    match name {
        "customers" => svg(r#"<path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M23 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#),
        "products" => svg(r#"<path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/><path d="M3.27 6.96 12 12l8.73-5.04"/><path d="M12 22V12"/>"#),
        "inventory" => svg(r#"<rect x="3" y="3" width="7" height="7" rx="1"/><rect x="14" y="3" width="7" height="7" rx="1"/><rect x="14" y="14" width="7" height="7" rx="1"/><rect x="3" y="14" width="7" height="7" rx="1"/>"#),
        "sales" => svg(r#"<path d="M3 3v18h18"/><path d="m19 9-5 5-4-4-3 3"/>"#),
        "template" => svg(r#"<path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"/><path d="M14 2v6h6"/><path d="M8 13h8"/><path d="M8 17h8"/>"#),
        "building" => svg(r#"<rect x="4" y="2" width="16" height="20" rx="2"/><path d="M9 22v-4h6v4"/><path d="M8 6h.01"/><path d="M16 6h.01"/><path d="M8 10h.01"/><path d="M16 10h.01"/><path d="M8 14h.01"/><path d="M16 14h.01"/>"#),
        "save" => svg(r#"<path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/><path d="M17 21v-8H7v8"/><path d="M7 3v5h8"/>"#),
        "plus" => svg(r#"<path d="M12 5v14"/><path d="M5 12h14"/>"#),
        "edit" => svg(r#"<path d="M12 20h9"/><path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4Z"/>"#),
        "delete" => svg(r#"<path d="M3 6h18"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/><path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>"#),
        "refresh" => svg(r#"<path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M3 21v-5h5"/><path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/>"#),
        "download" => svg(r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m7 10 5 5 5-5"/><path d="M12 15V3"/>"#),
        "upload" => svg(r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m17 8-5-5-5 5"/><path d="M12 3v12"/>"#),
        "file-text" => svg(r#"<path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"/><path d="M14 2v6h6"/><path d="M16 13H8"/><path d="M16 17H8"/>"#),
        "search" => svg(r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#),
        "filter" => svg(r#"<path d="M22 3H2l8 9.46V19l4 2v-8.54L22 3z"/>"#),
        "x" => svg(r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#),
        "arrow-left" => svg(r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#),
        "user" => svg(r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#),
        "log-out" => svg(r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><path d="m16 17 5-5-5-5"/><path d="M21 12H9"/>"#),
        "clock" => svg(r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#),
        "chevron-right" => svg(r#"<path d="m9 18 6-6-6-6"/>"#),
        "chevron-left" => svg(r#"<path d="m15 18-6-6 6-6"/>"#),
        "chevrons-left" => svg(r#"<path d="m11 17-5-5 5-5"/><path d="m18 17-5-5 5-5"/>"#),
        "chevrons-right" => svg(r#"<path d="m6 17 5-5-5-5"/><path d="m13 17 5-5-5-5"/>"#),
        "chevron-down" => svg(r#"<path d="m6 9 6 6 6-6"/>"#),
        _ => view! { <span class="icon-missing">"?"</span> }.into_any(),
    }
}
