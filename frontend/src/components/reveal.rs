use web_sys::{window, Element};
use yew::prelude::*;
use yew_hooks::prelude::*;

use imphnen_site::motion::should_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger offset, e.g. `100 * index` for card grids.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

fn in_view(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let viewport = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    should_reveal(element.get_bounding_client_rect().top(), viewport)
}

/// Fades its children in the first time they scroll into view. Once shown
/// they stay shown.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            if !*visible && in_view(&node) {
                visible.set(true);
            }
        });
    }

    // Sections already on screen at load must not wait for a scroll
    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                if in_view(&node) {
                    visible.set(true);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", (*visible).then(|| "revealed"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
