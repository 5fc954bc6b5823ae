use yew::prelude::*;
use crate::content::FaqEntry;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub faqs: &'static [FaqEntry],
}

/// Accordion with at most one answer open; clicking the open question
/// closes it again.
#[function_component(FaqSection)]
pub fn faq_section(props: &Props) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="mt-10">
            <h3 class={HEADING_SM}>{"Frequently Asked Questions"}</h3>
            <ul class={SPACE_Y_BASE}>
                {for props.faqs.iter().enumerate().map(|(idx, faq)| {
                    let is_open = *open == Some(idx);
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |_| {
                            open.set(if *open == Some(idx) { None } else { Some(idx) });
                        })
                    };

                    html! {
                        <li class={CARD}>
                            <button type="button" {onclick}
                                aria-expanded={is_open.to_string()}
                                aria-label={format!("Toggle answer for: {}", faq.question)}
                                class="w-full flex justify-between items-center text-left text-gray-200 font-medium">
                                {faq.question}
                                <span class="text-gray-400 ml-4" aria-hidden="true">
                                    {if is_open { "▲" } else { "▼" }}
                                </span>
                            </button>
                            {if is_open {
                                html! { <div class="mt-3 text-gray-400">{faq.answer}</div> }
                            } else { html! {} }}
                        </li>
                    }
                })}
            </ul>
        </section>
    }
}
