use dioxus::prelude::*;

use crate::t;

#[derive(Debug, Clone, Copy)]
pub struct Sponsor {
    pub name: &'static str,
    pub logo: &'static str,
    pub url: &'static str,
    pub description: fn() -> String,
}

pub const SPONSORS: &[Sponsor] = &[
    Sponsor {
        name: "AntSK",
        logo: "https://antsk.cn/logo.ico",
        url: "https://antsk.cn/",
        description: antsk_description,
    },
    Sponsor {
        name: "302.AI",
        logo: "https://302.ai/logo.ico",
        url: "https://302.ai/",
        description: ai302_description,
    },
    Sponsor {
        name: "痴者工良",
        logo: "https://www.whuanle.cn/wp-content/uploads/2020/04/image-1586681324216.png",
        url: "https://www.whuanle.cn/",
        description: whuanle_description,
    },
];

fn antsk_description() -> String {
    t!("sponsor-antsk-description")
}

fn ai302_description() -> String {
    t!("sponsor-302ai-description")
}

fn whuanle_description() -> String {
    t!("sponsor-whuanle-description")
}

#[component]
pub fn Sponsors() -> Element {
    rsx! {
        section { class: "sponsors",
            h2 { class: "sponsors__title", {t!("sponsors-title")} }
            div { class: "sponsors__grid",
                for sponsor in SPONSORS.iter() {
                    a {
                        key: "{sponsor.name}",
                        class: "sponsor-card",
                        href: sponsor.url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        img {
                            class: "sponsor-card__logo",
                            src: sponsor.logo,
                            alt: sponsor.name,
                        }
                        h3 { class: "sponsor-card__name", "{sponsor.name}" }
                        p { class: "sponsor-card__description", {(sponsor.description)()} }
                    }
                }
            }
        }
    }
}
