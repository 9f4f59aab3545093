use super::{Icon, IconStyle};
use crate::objects::{MealKey, Recipe};
use yew::prelude::*;

pub struct MealCard;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub recipe: Recipe,
    pub meal_key: MealKey,
    pub selected: bool,
    pub on_toggle: Callback<MealKey>,
}

impl MealCard {
    fn view_checkbox(&self, props: &Props) -> Html {
        let key = props.meal_key.clone();
        let onclick = props.on_toggle.reform(move |_: MouseEvent| key.clone());
        let name = match props.selected {
            true => "check_box",
            false => "check_box_outline_blank",
        };

        html! {
            <button class="button is-white has-text-link" id={props.meal_key.to_string()} {onclick}>
                <Icon name={name} />
            </button>
        }
    }

    fn view_actions(&self, recipe: &Recipe) -> Html {
        let feed = match recipe.is_completed() {
            true => html!(<button class="button is-success is-light is-fullwidth"><Icon name="check" /><span>{"Fed"}</span></button>),
            false => html!(<button class="button is-link is-light is-fullwidth"><Icon name="add" /><span>{"Feed?"}</span></button>),
        };

        html! {
            <div class="columns is-mobile">
                <div class="column">
                    <button class="button is-link is-light is-fullwidth"><Icon name="tune" /><span>{"Customize"}</span></button>
                </div>
                <div class="column">{feed}</div>
            </div>
        }
    }
}

impl Component for MealCard {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let recipe = &props.recipe;
        let heart = match recipe.is_favorite() {
            true => html!(<Icon name="favorite" />),
            false => html!(<Icon name="favorite_border" style={IconStyle::Outlined} />),
        };

        html! {
            <div class="card mb-4">
                <div class="card-content">
                    <div class="level is-mobile">
                        <div class="level-left">
                            <div class="level-item">{self.view_checkbox(props)}</div>
                            <div class="level-item has-text-grey">{&recipe.time_slot}</div>
                        </div>
                        <div class="level-right"><div class="level-item has-text-grey">{heart}</div></div>
                    </div>
                    <div class="media">
                        <div class="media-left">
                            <figure class="image is-64x64"><img class="is-rounded" src={recipe.image.clone()} alt={recipe.title.clone()}/></figure>
                        </div>
                        <div class="media-content">
                            <p class="title is-5">{&recipe.title}</p>
                            <p class="subtitle is-6 has-text-grey"><Icon name="schedule" style={IconStyle::Outlined} />{format!("{} mins", recipe.duration)}</p>
                        </div>
                    </div>
                    {self.view_actions(recipe)}
                </div>
            </div>
        }
    }
}
