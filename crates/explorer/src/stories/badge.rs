use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdCheck};
use dioxus_free_icons::Icon;
use kit_ui::{Badge, BadgeSize, BadgeVariant};

use super::StorySection;

const VARIANTS: &[BadgeVariant] = &[
    BadgeVariant::Neutral,
    BadgeVariant::Info,
    BadgeVariant::Success,
    BadgeVariant::Warning,
    BadgeVariant::Error,
];

#[component]
pub fn BadgeStory() -> Element {
    rsx! {
        StorySection { title: "Variants",
            div { class: "story-row",
                for variant in VARIANTS.iter().copied() {
                    Badge { key: "{variant.as_str()}", variant, "{variant.as_str()}" }
                }
            }
        }
        StorySection { title: "Sizes",
            div { class: "story-row",
                Badge { size: BadgeSize::Sm, "Small" }
                Badge { size: BadgeSize::Md, "Medium" }
            }
        }
        StorySection { title: "Status dot and icons",
            div { class: "story-row",
                Badge { variant: BadgeVariant::Success, status_dot: true, "Online" }
                Badge {
                    variant: BadgeVariant::Info,
                    leading_icon: rsx! { Icon::<LdBell> { icon: LdBell, width: 12, height: 12 } },
                    "3 new"
                }
                Badge {
                    variant: BadgeVariant::Success,
                    trailing_icon: rsx! { Icon::<LdCheck> { icon: LdCheck, width: 12, height: 12 } },
                    "Verified"
                }
            }
        }
    }
}
