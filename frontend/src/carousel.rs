use yew::prelude::*;
use gloo_timers::callback::Interval;
use shared::models::RecentAnalysis;
use crate::styles::*;
use std::rc::Rc;

const ROTATE_MS: u32 = 4_000;

#[derive(PartialEq)]
struct CarouselIndex(usize);

enum IndexMsg {
    Advance { len: usize },
}

impl Reducible for CarouselIndex {
    type Action = IndexMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            IndexMsg::Advance { len } => Rc::new(Self((self.0 + 1) % len)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub analyses: Vec<RecentAnalysis>,
}

/// Rotates through past analyses on a fixed interval. The interval is
/// dropped in the effect destructor so teardown never leaks a timer.
#[function_component(RecentAnalysesCarousel)]
pub fn recent_analyses_carousel(props: &Props) -> Html {
    let index = use_reducer(|| CarouselIndex(0));
    let len = props.analyses.len();

    {
        let index = index.clone();
        use_effect_with_deps(move |&len| {
            let interval = (len > 0).then(|| {
                Interval::new(ROTATE_MS, move || {
                    index.dispatch(IndexMsg::Advance { len });
                })
            });
            move || drop(interval)
        }, len);
    }

    if len == 0 {
        return html! {};
    }
    let current = &props.analyses[index.0 % len];

    html! {
        <div class="mt-10">
            <div class="text-gray-200 font-semibold mb-2">{"Recent Analyses"}</div>
            <div class={verdict_box(current.verdict)}>
                <div class={combine_classes("text-lg font-bold tracking-wide", verdict_text(current.verdict))}>
                    {current.verdict.label_upper()}
                </div>
                <div class="text-gray-300 mt-2 break-words">
                    {format!("\"{}\"", current.message)}
                </div>
                <div class="flex items-center justify-center gap-3 mt-3 text-sm text-gray-400">
                    <span>{"Confidence:"}</span>
                    <div class="w-20 bg-gray-700 rounded-full h-2 overflow-hidden">
                        <div class={combine_classes(&meter_fill(current.verdict), "h-2")}
                            style={format!("width: {:.1}%", current.confidence * 100.0)} />
                    </div>
                    <span>{format!("{:.1}%", current.confidence * 100.0)}</span>
                </div>
            </div>
        </div>
    }
}
