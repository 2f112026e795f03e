use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under `/icons`)
    name: &'static str,
    /// CSS classes
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_UP: &str = "arrow-up";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const GIFT: &str = "gift";
    pub const LEAF: &str = "leaf";
    pub const PAPER_PLANE: &str = "paper-plane";
    pub const TRUCK: &str = "truck";
    pub const X: &str = "x";
}
