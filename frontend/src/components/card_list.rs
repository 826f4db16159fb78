use yew::prelude::*;

use crate::components::icons::{Icon, IconView};

/// A literal content record that can be shown as a card.
pub trait CardRecord: PartialEq + 'static {
    /// Prominent text of the card (a title, a name, a figure).
    fn label(&self) -> &'static str;
    fn description(&self) -> &'static str;

    fn image(&self) -> Option<String> {
        None
    }

    /// Small secondary line, e.g. a price or a client's role.
    fn detail(&self) -> Option<&'static str> {
        None
    }
}

#[derive(Properties, PartialEq)]
pub struct CardListProps<T>
where
    T: CardRecord,
{
    pub items: &'static [T],
    /// Per-card class; every card also carries `card`.
    #[prop_or_default]
    pub card_class: Classes,
    #[prop_or_default]
    pub class: Classes,
    /// Label of an inert trailing action control.
    #[prop_or_default]
    pub action: Option<AttrValue>,
}

#[function_component(CardList)]
pub fn card_list<T>(props: &CardListProps<T>) -> Html
where
    T: CardRecord,
{
    html! {
        <div class={classes!("card-list", props.class.clone())}>
            { for props.items.iter().map(|item| {
                let detail = item
                    .detail()
                    .map(|detail| html! { <span class="card-detail">{ detail }</span> });

                html! {
                    <article class={classes!("card", props.card_class.clone())}>
                        {
                            if let Some(src) = item.image() {
                                html! {
                                    <div class="card-media">
                                        <img src={src} alt={item.label()} loading="lazy" />
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <div class="card-body">
                            <h4 class="card-label">{ item.label() }</h4>
                            {
                                match props.action.clone() {
                                    // With an action the detail moves down next to it
                                    Some(action) => html! {
                                        <>
                                            <p class="card-description">{ item.description() }</p>
                                            <div class="card-footer">
                                                { detail.unwrap_or_default() }
                                                <button type="button" class="card-action">
                                                    { action }
                                                    <IconView icon={Icon::ChevronRight} size={16} />
                                                </button>
                                            </div>
                                        </>
                                    },
                                    None => html! {
                                        <>
                                            { detail.unwrap_or_default() }
                                            <p class="card-description">{ item.description() }</p>
                                        </>
                                    },
                                }
                            }
                        </div>
                    </article>
                }
            }) }
        </div>
    }
}
