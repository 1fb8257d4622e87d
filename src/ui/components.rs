/// Reusable pieces of the landing view

use crate::config::{CalendarEntry, DeepLinkConfig, RecentEntry};
use crate::destination::ForbiddenSet;
use crate::labels::{EnglishLabels, TranslationLookup, forbidden_characters_message};
use crate::tabs::TabId;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MeetingTabsProps {
    /// Non-empty, already ordered.
    pub tabs: Vec<TabId>,
    #[prop_or_default]
    pub upcoming: Vec<CalendarEntry>,
    #[prop_or_default]
    pub recent: Vec<RecentEntry>,
    pub on_join: Callback<String>,
}

#[function_component(MeetingTabs)]
pub fn meeting_tabs(props: &MeetingTabsProps) -> Html {
    let labels = EnglishLabels;
    let first = props.tabs.first().copied().unwrap_or(TabId::Calendar);
    let active_tab = use_state(|| first);

    // The tab set can shrink while mounted
    let active = if props.tabs.contains(&*active_tab) { *active_tab } else { first };

    let on_tab_click = {
        let active_tab = active_tab.clone();
        move |tab: TabId| {
            let active_tab = active_tab.clone();
            Callback::from(move |_: MouseEvent| {
                active_tab.set(tab);
            })
        }
    };

    html! {
        <div class="tab-container" aria-label={labels.translate("welcomepage.meetingsAccessibilityLabel")}>
            <div class="pf-v5-c-tabs tabs-nav">
                <ul class="pf-v5-c-tabs__list" role="tablist">
                    {for props.tabs.iter().map(|tab| html! {
                        <li
                            key={tab.as_str()}
                            class={if *tab == active { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }}
                        >
                            <button
                                class="pf-v5-c-tabs__link"
                                id={format!("{}-tab", tab.as_str())}
                                role="tab"
                                aria-selected={(*tab == active).to_string()}
                                onclick={on_tab_click(*tab)}
                            >
                                <span class="pf-v5-c-tabs__item-text">{labels.translate(tab.label_key())}</span>
                            </button>
                        </li>
                    })}
                </ul>
            </div>

            <div class="tab-pane-content" role="tabpanel">
                {match active {
                    TabId::Calendar => html! {
                        <CalendarList entries={props.upcoming.clone()} on_join={props.on_join.clone()} />
                    },
                    TabId::Recent => html! {
                        <RecentList entries={props.recent.clone()} on_join={props.on_join.clone()} />
                    },
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CalendarListProps {
    pub entries: Vec<CalendarEntry>,
    pub on_join: Callback<String>,
}

#[function_component(CalendarList)]
pub fn calendar_list(props: &CalendarListProps) -> Html {
    if props.entries.is_empty() {
        return html! {
            <p class="meetings-list-empty">{EnglishLabels.translate("welcomepage.noUpcomingMeetings")}</p>
        };
    }

    html! {
        <div class="meetings-list">
            {for props.entries.iter().map(|entry| {
                let room = entry.room.clone();
                let on_join = props.on_join.clone();
                html! {
                    <div class="meetings-list-item">
                        <span class="meetings-list-item-title">{&entry.title}</span>
                        if let Some(start) = &entry.start_time {
                            <span class="meetings-list-item-time">{start}</span>
                        }
                        <Button onclick={Callback::from(move |_| on_join.emit(room.clone()))} variant={ButtonVariant::Secondary}>
                            {&entry.room}
                        </Button>
                    </div>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecentListProps {
    pub entries: Vec<RecentEntry>,
    pub on_join: Callback<String>,
}

#[function_component(RecentList)]
pub fn recent_list(props: &RecentListProps) -> Html {
    if props.entries.is_empty() {
        return html! {
            <p class="meetings-list-empty">{EnglishLabels.translate("welcomepage.noRecentMeetings")}</p>
        };
    }

    html! {
        <div class="meetings-list">
            {for props.entries.iter().map(|entry| {
                let room = entry.room.clone();
                let on_join = props.on_join.clone();
                html! {
                    <div class="meetings-list-item">
                        <Button onclick={Callback::from(move |_| on_join.emit(room.clone()))} variant={ButtonVariant::Secondary}>
                            {&entry.room}
                        </Button>
                        if let Some(date) = &entry.date {
                            <span class="meetings-list-item-time">{date}</span>
                        }
                    </div>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoomNameWarningProps {
    pub visible: bool,
    #[prop_or_default]
    pub forbidden_set: ForbiddenSet,
}

#[function_component(RoomNameWarning)]
pub fn room_name_warning(props: &RoomNameWarningProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <div class="insecure-room-name-warning">
            <Alert r#type={AlertType::Warning} title={forbidden_characters_message(&EnglishLabels, props.forbidden_set)} inline={true}>
            </Alert>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WelcomeFooterProps {
    pub deeplinking: DeepLinkConfig,
}

#[function_component(WelcomeFooter)]
pub fn welcome_footer(props: &WelcomeFooterProps) -> Html {
    let labels = EnglishLabels;
    let badges = [
        (props.deeplinking.ios_download(), "welcomepage.mobileDownLoadLinkIos", "./images/app-store-badge.png"),
        (props.deeplinking.android_download(), "welcomepage.mobileDownLoadLinkAndroid", "./images/google-play-badge.png"),
        (props.deeplinking.f_droid(), "welcomepage.mobileDownLoadLinkFDroid", "./images/f-droid-badge.png"),
    ];

    html! {
        <footer class="welcome-footer">
            <div class="welcome-footer-centered">
                <div class="welcome-footer-padded">
                    <div class="welcome-footer-row-block welcome-footer--row-1">
                        <div class="welcome-footer-row-1-text">{labels.translate("welcomepage.jitsiOnMobile")}</div>
                        {for badges.into_iter().filter_map(|(link, alt_key, image)| link.map(|url| html! {
                            <a class="welcome-badge" href={url.to_string()} rel="noopener noreferrer" target="_blank">
                                <img alt={labels.translate(alt_key)} src={image} />
                            </a>
                        }))}
                    </div>
                </div>
            </div>
        </footer>
    }
}
