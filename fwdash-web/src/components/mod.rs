use leptos::prelude::*;

pub use loading_spinner::LoadingSpinner;
pub use warning_message::WarningMessage;

mod loading_spinner;
mod warning_message;

#[derive(Clone, Copy, Debug)]
pub enum FontAwesomeIcon {
    ShieldHalved,
    MagnifyingGlass,
    Microchip,
}

impl FontAwesomeIcon {

    pub fn as_class(&self) -> &'static str {
        match self {
            FontAwesomeIcon::ShieldHalved => "fa-solid fa-shield-halved",
            FontAwesomeIcon::MagnifyingGlass => "fa-solid fa-magnifying-glass",
            FontAwesomeIcon::Microchip => "fa-solid fa-microchip",
        }
    }
}

#[component]
pub fn Icon(icon: FontAwesomeIcon) -> impl IntoView {
    view! {
        <span class="icon">
            <i class={ icon.as_class() } aria-hidden="true"></i>
        </span>
    }
}
