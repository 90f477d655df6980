use crate::embed::device::{DeviceClass, WindowViewport};
use crate::utils::listener::EventListener;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Tracks whether the node is inside the viewport grown by `root_margin`.
/// Browsers without `IntersectionObserver` report the node as in view.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                if let Some(element) = node.cast::<Element>() {
                    let setter = in_view.clone();
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, _observer: IntersectionObserver| {
                            let latest = entries
                                .iter()
                                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                                .last();
                            if let Some(entry) = latest {
                                setter.set(entry.is_intersecting());
                            }
                        },
                    );
                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(root_margin);
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some((obs, callback));
                        }
                        Err(e) => {
                            log::warn!("IntersectionObserver unavailable: {:?}", e);
                            in_view.set(true);
                        }
                    }
                }
                move || {
                    if let Some((obs, _callback)) = observer {
                        obs.disconnect();
                    }
                }
            },
            node,
        );
    }

    *in_view
}

/// Device class of the current window, kept up to date on resize.
#[hook]
pub fn use_device_class() -> DeviceClass {
    let device = use_state_eq(|| DeviceClass::detect(&WindowViewport));

    {
        let device = device.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::on_window("resize", move |_| {
                    device.set(DeviceClass::detect(&WindowViewport));
                });
                move || drop(listener)
            },
            (),
        );
    }

    *device
}
