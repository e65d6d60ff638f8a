#![allow(non_snake_case)]

use super::*;

#[component]
pub fn About() -> Element {
    rsx! {
        InfoPage {
            title: "About",
            lead: "beacon, it's yet another notification router! but with a twist",
            sections: vec![
                SectionLink::new("story", "Story"),
                SectionLink::new("team", "Team"),
            ],

            InfoSection { id: "story", title: "Story",
                p { "we got tired of alerts that said something broke without saying where to look" }
                p { "so every notification beacon sends links to the exact section of the runbook that matters" }
            }

            InfoSection { id: "team", title: "Team", palette: Palette::Ocean,
                p { "a handful of people who have been on call too many times" }
                Link { to: Route::Contact {}, "say hi" }
            }
        }
    }
}
