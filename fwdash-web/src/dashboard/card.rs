use leptos::prelude::*;

use fwdash_types::record::{Channel, FirmwareRecord};

const MISSING_HARDWARE_REV: &str = "n/a";

fn badge_class(channel: Channel) -> &'static str {
    match channel {
        Channel::Approved => "tag is-success",
        Channel::Beta => "tag is-warning",
    }
}

#[component]
pub fn ChannelBadge(channel: Channel) -> impl IntoView {
    view! {
        <span class={ badge_class(channel) } title={ channel.description() }>
            { channel.as_str() }
        </span>
    }
}

#[component]
pub fn FirmwareCard(record: FirmwareRecord) -> impl IntoView {

    let FirmwareRecord { product_code, product_name, hardware_rev, channel, version, released_at, notes } = record;

    let hardware_rev = hardware_rev.unwrap_or_else(|| String::from(MISSING_HARDWARE_REV));

    view! {
        <div class="card mb-4" class:has-background-warning-light={ channel == Channel::Beta }>
            <div class="card-content">
                <div class="level is-mobile mb-2">
                    <div class="level-left">
                        <div class="level-item">
                            <p class="title is-5">{ product_name }</p>
                        </div>
                    </div>
                    <div class="level-right">
                        <div class="level-item">
                            <ChannelBadge channel=channel />
                        </div>
                    </div>
                </div>
                <p class="subtitle is-6 has-text-grey">
                    { product_code }" · "{ hardware_rev }
                </p>
                <div class="columns is-mobile">
                    <div class="column">
                        <p class="heading">"Version"</p>
                        <p class="is-family-monospace">{ version }</p>
                    </div>
                    <div class="column">
                        <p class="heading">"Released"</p>
                        <p>{ released_at.to_string() }</p>
                    </div>
                </div>
                { notes.map(|notes| view! { <p class="content is-small">{ notes }</p> }) }
            </div>
        </div>
    }
}
