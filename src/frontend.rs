//! The mounted page: markup, window-scoped observers, and every DOM write.
//!
//! All window-level subscriptions are RAII values created in the mount effect
//! and dropped by its teardown, so a remount can never double-register and an
//! unmount can never leak a listener or a pending animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{window, FocusEvent, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::interaction::{is_narrow_viewport, InteractionMode};
use crate::motion::{parallax_offset, TrailTween};
use crate::projects::{cta_label, handwritten_note_src, Media, ProjectRecord, PROJECTS};
use crate::theme::{apply_theme, apply_theme_with_transition, Theme};

const PRESSED_CURSOR_CLASS: &str = "cursor-active";

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn viewport_is_narrow() -> bool {
    is_narrow_viewport(viewport_size().0)
}

/// Snap the cursor dot to the raw pointer position.
pub fn position_dot(el: &HtmlElement, pointer: (f64, f64)) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{:.1}px", pointer.0));
    let _ = style.set_property("top", &format!("{:.1}px", pointer.1));
}

/// Publish the parallax offset as custom properties on the preview panel.
/// The stylesheet consumes `--mouse-x`/`--mouse-y`; no re-render happens.
pub fn publish_parallax(el: &HtmlElement, offset: (f64, f64)) {
    let style = el.style();
    let _ = style.set_property("--mouse-x", &format!("{:.2}px", offset.0));
    let _ = style.set_property("--mouse-y", &format!("{:.2}px", offset.1));
}

pub fn set_outline_pressed(el: &HtmlElement, pressed: bool) {
    let classes = el.class_list();
    if pressed {
        let _ = classes.add_1(PRESSED_CURSOR_CLASS);
    } else {
        let _ = classes.remove_1(PRESSED_CURSOR_CLASS);
    }
}

/// Window-scoped pointer observers. Dropping the value deregisters all of
/// them.
pub struct PointerObservers {
    _listeners: [EventListener; 3],
}

pub fn attach_pointer_observers(
    dot: HtmlElement,
    outline: HtmlElement,
    preview: HtmlElement,
    trail: Rc<RefCell<TrailTween>>,
) -> Option<PointerObservers> {
    let target = window()?;

    let mousemove = EventListener::new(&target, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
        publish_parallax(&preview, parallax_offset(pointer, viewport_size()));
        position_dot(&dot, pointer);
        trail.borrow_mut().retarget(event.time_stamp(), pointer);
    });

    let pressed = outline.clone();
    let mousedown = EventListener::new(&target, "mousedown", move |_| {
        set_outline_pressed(&pressed, true);
    });

    let released = outline;
    let mouseup = EventListener::new(&target, "mouseup", move |_| {
        set_outline_pressed(&released, false);
    });

    Some(PointerObservers {
        _listeners: [mousemove, mousedown, mouseup],
    })
}

pub fn attach_viewport_observer(on_change: Callback<bool>) -> Option<EventListener> {
    let target = window()?;
    Some(EventListener::new(&target, "resize", move |_| {
        on_change.emit(viewport_is_narrow());
    }))
}

/// Keeps the trail's animation-frame loop alive; dropping cancels the pending
/// frame, which ends the loop.
pub struct TrailLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl TrailLoop {
    pub fn start(outline: HtmlElement, trail: Rc<RefCell<TrailTween>>) -> Self {
        let pending = Rc::new(RefCell::new(None));
        schedule_trail_frame(&pending, outline, trail);
        Self { pending }
    }
}

impl Drop for TrailLoop {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

fn schedule_trail_frame(
    pending: &Rc<RefCell<Option<AnimationFrame>>>,
    outline: HtmlElement,
    trail: Rc<RefCell<TrailTween>>,
) {
    let slot = pending.clone();
    let frame = request_animation_frame(move |now| {
        let position = trail.borrow_mut().sample(now);
        let style = outline.style();
        let _ = style.set_property("left", &format!("{:.1}px", position.0));
        let _ = style.set_property("top", &format!("{:.1}px", position.1));
        schedule_trail_frame(&slot, outline, trail);
    });
    *pending.borrow_mut() = Some(frame);
}

fn media_view(record: &ProjectRecord) -> Html {
    match record.media {
        Media::Video(src) => html! {
            <video
                class="preview-media"
                src={src}
                autoplay=true
                loop=true
                muted=true
                playsinline=true
            />
        },
        Media::Image(src) => html! {
            <img class="preview-media" src={src} alt={record.name} />
        },
    }
}

#[derive(Properties, PartialEq)]
struct ProjectLinkProps {
    record: ProjectRecord,
    narrow: bool,
    on_enter: Callback<ProjectRecord>,
    on_leave: Callback<ProjectRecord>,
    on_activate: Callback<ProjectRecord>,
}

#[function_component(ProjectLink)]
fn project_link(props: &ProjectLinkProps) -> Html {
    let record = props.record;
    let narrow = props.narrow;

    let onmouseenter = {
        let on_enter = props.on_enter.clone();
        Callback::from(move |_: MouseEvent| {
            if !narrow {
                on_enter.emit(record);
            }
        })
    };

    let onmouseleave = {
        let on_leave = props.on_leave.clone();
        Callback::from(move |_: MouseEvent| {
            if !narrow {
                on_leave.emit(record);
            }
        })
    };

    let onfocus = {
        let on_enter = props.on_enter.clone();
        Callback::from(move |_: FocusEvent| {
            if !narrow {
                on_enter.emit(record);
            }
        })
    };

    let onblur = {
        let on_leave = props.on_leave.clone();
        Callback::from(move |_: FocusEvent| {
            if !narrow {
                on_leave.emit(record);
            }
        })
    };

    // On narrow viewports the tap opens the modal instead of navigating.
    let onclick = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |event: MouseEvent| {
            if narrow {
                event.prevent_default();
                on_activate.emit(record);
            }
        })
    };

    html! {
        <a
            class="project-row"
            href={record.link}
            target="_blank"
            rel="noopener noreferrer"
            {onmouseenter}
            {onmouseleave}
            {onfocus}
            {onblur}
            {onclick}
        >
            <span class="project-name">{record.name}</span>
            { record.year.map(|year| html! { <span class="project-year">{year}</span> }).unwrap_or_default() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    record: ProjectRecord,
    on_dismiss: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let on_overlay_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    // Clicks inside the content must never reach the background-close
    // handler.
    let on_content_click = Callback::from(|event: MouseEvent| event.stop_propagation());

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="project-modal-overlay" onclick={on_overlay_click}>
            <div class="project-modal" onclick={on_content_click}>
                <button class="modal-close" type="button" aria-label="Close preview" onclick={on_close}>
                    {"×"}
                </button>
                <div class="modal-media">{ media_view(&props.record) }</div>
                <a
                    class="modal-link"
                    href={props.record.link}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { cta_label(&props.record) }
                </a>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(|| Theme::Light);
    let narrow = use_state_eq(viewport_is_narrow);
    let mode = use_state(InteractionMode::default);

    let dot_ref = use_node_ref();
    let outline_ref = use_node_ref();
    let preview_ref = use_node_ref();

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    {
        let mode = mode.clone();
        use_effect_with(*narrow, move |viewport_narrow| {
            let next = (*mode).reclassify(*viewport_narrow);
            if next != *mode {
                mode.set(next);
            }
            || ()
        });
    }

    {
        let narrow = narrow.clone();
        let dot_ref = dot_ref.clone();
        let outline_ref = outline_ref.clone();
        let preview_ref = preview_ref.clone();
        use_effect_with((), move |_| {
            let trail = Rc::new(RefCell::new(TrailTween::new((0.0, 0.0))));

            let viewport = attach_viewport_observer(Callback::from(move |value| {
                narrow.set(value);
            }));

            let pointer = match (
                dot_ref.cast::<HtmlElement>(),
                outline_ref.cast::<HtmlElement>(),
                preview_ref.cast::<HtmlElement>(),
            ) {
                (Some(dot), Some(outline), Some(preview)) => {
                    attach_pointer_observers(dot, outline, preview, trail.clone())
                }
                _ => None,
            };

            let trail_loop = outline_ref
                .cast::<HtmlElement>()
                .map(|outline| TrailLoop::start(outline, trail));

            log::debug!("window observers attached");
            move || {
                drop(pointer);
                drop(viewport);
                drop(trail_loop);
                log::debug!("window observers removed");
            }
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let on_enter = {
        let mode = mode.clone();
        let narrow = narrow.clone();
        Callback::from(move |record: ProjectRecord| {
            mode.set((*mode).pointer_enter(record, *narrow));
        })
    };

    let on_leave = {
        let mode = mode.clone();
        let narrow = narrow.clone();
        Callback::from(move |record: ProjectRecord| {
            mode.set((*mode).pointer_leave(record, *narrow));
        })
    };

    let on_activate = {
        let mode = mode.clone();
        let narrow = narrow.clone();
        Callback::from(move |record: ProjectRecord| {
            mode.set((*mode).activate(record, *narrow));
        })
    };

    let on_dismiss = {
        let mode = mode.clone();
        Callback::from(move |()| mode.set((*mode).dismiss()))
    };

    let hovered = mode.hovered().copied();
    let selected = mode.selected().copied();

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="cursor-dot" ref={dot_ref} aria-hidden="true"></div>
            <div class="cursor-outline" ref={outline_ref} aria-hidden="true"></div>

            <aside
                ref={preview_ref}
                class={classes!("hover-preview", hovered.is_some().then_some("is-visible"))}
                aria-hidden="true"
            >
                { hovered.as_ref().map(media_view).unwrap_or_default() }
            </aside>

            {
                selected
                    .map(|record| html! { <ProjectModal record={record} on_dismiss={on_dismiss.clone()} /> })
                    .unwrap_or_default()
            }

            <main id="content" class="page-shell">
                <section class="projects-block" aria-label="Projects">
                    <ul class="project-list">
                        { for PROJECTS.iter().map(|record| html! {
                            <li key={record.name}>
                                <ProjectLink
                                    record={*record}
                                    narrow={*narrow}
                                    on_enter={on_enter.clone()}
                                    on_leave={on_leave.clone()}
                                    on_activate={on_activate.clone()}
                                />
                            </li>
                        }) }
                    </ul>
                </section>

                <section
                    class={classes!("intro-block", hovered.is_some().then_some("is-hidden"))}
                    aria-labelledby="identity-heading"
                >
                    <h1 id="identity-heading" class="intro-line">{"Nakul Mistry"}</h1>
                    <div class="role-line">
                        <p class="intro-line">{"Full Stack Developer"}</p>
                        <img
                            class="handwritten-note"
                            src={handwritten_note_src(*theme)}
                            alt="Mostly backend"
                        />
                    </div>
                    <div class="social-links">
                        <a href="https://github.com/thenakulmistry" target="_blank" rel="noopener noreferrer">
                            {"GitHub"}
                        </a>
                        <a href="https://linkedin.com/in/nakul7" target="_blank" rel="noopener noreferrer">
                            {"LinkedIn"}
                        </a>
                        <a href="mailto:mistrynakul2001@gmail.com">{"Email"}</a>
                        <button
                            class="theme-toggle"
                            type="button"
                            aria-label={(*theme).toggle_label()}
                            aria-pressed={(*theme).pressed().to_string()}
                            onclick={on_toggle_theme}
                        >
                            <span aria-hidden="true">{(*theme).icon()}</span>
                        </button>
                    </div>
                </section>
            </main>
        </>
    }
}

pub fn run() {
    let _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("mounting portfolio app");

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
