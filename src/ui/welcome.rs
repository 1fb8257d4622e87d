/// Welcome (landing) page

use crate::config::WelcomeConfig;
use crate::context::is_mobile_user_agent;
use crate::destination::{ForbiddenSet, ROOM_NAME_VALIDATE_PATTERN_STR, generate_room_name};
use crate::labels::{EnglishLabels, TranslationLookup, forbidden_characters_message};
use crate::landing::{JoinOperation, LandingView, SubmitOutcome, ValidityReporter};
use crate::slots::{ResolvedSlots, SlotKind};
use crate::tabs::compose_tabs;
use crate::ui::components::{MeetingTabs, RoomNameWarning, WelcomeFooter};
use crate::ui::dom::{BodyClassList, BridgeJoin, DomSlotHost, set_document_title};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WelcomePageProps {
    pub config: WelcomeConfig,
}

#[function_component(WelcomePage)]
pub fn welcome_page(props: &WelcomePageProps) -> Html {
    let config = &props.config;
    let labels = EnglishLabels;

    let view = {
        let forbidden_set = config.forbidden_set;
        use_mut_ref(move || LandingView::<BodyClassList>::new(forbidden_set))
    };
    let room = use_state(String::new);
    let forbidden = use_state(|| false);
    let room_input = use_node_ref();
    // Resolved once; rendering and injection both read this value
    let slots = {
        let interface_config = config.interface_config.clone();
        use_memo((), move |_| ResolvedSlots::resolve(&DomSlotHost, &interface_config))
    };

    // Body marker, slot injection and room name generation on mount
    {
        let view = view.clone();
        let interface_config = config.interface_config.clone();
        let slots = *slots;
        let room = room.clone();
        let forbidden = forbidden.clone();

        use_effect_with((), move |_| {
            set_document_title(&interface_config.app_name);

            view.borrow_mut()
                .mount_resolved(slots, &mut DomSlotHost, BodyClassList::from_document());

            if interface_config.generate_roomnames_on_welcome_page {
                let name = generate_room_name();
                let status = view.borrow_mut().on_destination_change(name.clone());
                forbidden.set(status.forbidden);
                room.set(name);
            }

            move || view.borrow_mut().unmount()
        });
    }

    let on_room_input = {
        let view = view.clone();
        let room = room.clone();
        let forbidden = forbidden.clone();

        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                let status = view.borrow_mut().on_destination_change(value.clone());
                forbidden.set(status.forbidden);
                room.set(value);
            }
        })
    };

    let on_submit = {
        let view = view.clone();
        let room_input = room_input.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input = room_input.cast::<HtmlInputElement>();
            let outcome = view
                .borrow()
                .on_submit(input.as_ref().map(|i| i as &dyn ValidityReporter), &BridgeJoin);

            if outcome == SubmitOutcome::Invalid {
                log::info!("Room name needs fixing before joining");
            }
        })
    };

    // Meetings listed in the tabs were joined before, so they skip the form
    let on_join_listed = Callback::from(|room: String| BridgeJoin.join(&room));

    let content_class = if slots.is_shown(SlotKind::Content) { "with-content" } else { "without-content" };
    let footer_class = if config.interface_config.display_welcome_footer { "with-footer" } else { "without-footer" };
    let tabs = compose_tabs(
        config.calendar_enabled,
        config.recent_list_enabled,
        is_mobile_user_agent(&config.host.user_agent),
    );

    html! {
        <div class={classes!("welcome", content_class, footer_class)} id="welcome_page">
            <div class="header">
                <div class="header-image"></div>
                <div class="header-container">
                    <div class="header-watermark-container">
                        <div class="welcome-watermark"></div>
                    </div>
                    <div class="welcome-page-settings">
                        if slots.is_shown(SlotKind::ToolbarContent) {
                            <div class={SlotKind::ToolbarContent.container_class()} id={SlotKind::ToolbarContent.container_id()} />
                        }
                    </div>
                    <h1 class="header-text-title">{&config.interface_config.app_name}</h1>

                    <div id="enter_room">
                        <div class="join-meeting-container">
                            <div class="enter-room-input-container">
                                <form onsubmit={on_submit}>
                                    <input
                                        aria-disabled="false"
                                        aria-label="Meeting name input"
                                        autofocus={true}
                                        class="enter-room-input"
                                        id="enter_room_field"
                                        oninput={on_room_input}
                                        pattern={ROOM_NAME_VALIDATE_PATTERN_STR}
                                        placeholder={labels.translate("welcomepage.roomname")}
                                        ref={room_input}
                                        required={true}
                                        title={forbidden_characters_message(&labels, ForbiddenSet::Pattern)}
                                        type="text"
                                        value={(*room).clone()}
                                    />
                                    <button
                                        aria-label={labels.translate("welcomepage.startMeeting")}
                                        class="welcome-page-button pf-v5-c-button pf-m-primary"
                                        id="enter_room_button"
                                        type="submit"
                                    >
                                        {labels.translate("welcomepage.startMeeting")}
                                    </button>
                                </form>
                            </div>
                        </div>
                    </div>
                    <RoomNameWarning visible={*forbidden} forbidden_set={config.forbidden_set} />

                    if let Some(tabs) = tabs {
                        <MeetingTabs
                            tabs={tabs}
                            upcoming={config.upcoming_meetings.clone()}
                            recent={config.recent_rooms.clone()}
                            on_join={on_join_listed}
                        />
                    }
                </div>
            </div>

            <div class="welcome-cards-container">
                <div class="welcome-card-column">
                    if slots.is_shown(SlotKind::Card) {
                        <div class={SlotKind::Card.container_class()} id={SlotKind::Card.container_id()} />
                    }
                </div>
                if slots.is_shown(SlotKind::Content) {
                    <div class={SlotKind::Content.container_class()} id={SlotKind::Content.container_id()} />
                }
            </div>

            if config.interface_config.display_welcome_footer {
                <WelcomeFooter deeplinking={config.deeplinking.clone()} />
            }
        </div>
    }
}
