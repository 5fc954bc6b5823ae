use yew::prelude::*;
use yew_router::prelude::*;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::HtmlTextAreaElement;
use shared::error::AnalyzeError;
use shared::models::{AnalysisResult, AnalyzeRequest, AnalyzeResponse, RecentAnalysis, Verdict};
use shared::validation::validate_message;
use crate::carousel::RecentAnalysesCarousel;
use crate::config::CONFIG;
use crate::content::{self, FAQS};
use crate::faq::FaqSection;
use crate::styles::*;
use crate::Route;

const CAROUSEL_SIZE: usize = 4;

/// Explicit submission lifecycle. Failure is a display state like any
/// other; the next submit restarts the cycle.
enum SubmissionState {
    Idle,
    Submitting,
    Succeeded(AnalysisResult),
    Failed(AnalyzeError),
}

pub enum Msg {
    UpdateMessage(String),
    UseExample(usize),
    Submit,
    SubmissionComplete(Result<AnalysisResult, AnalyzeError>),
}

pub struct ScamalyzerMain {
    message: String,
    state: SubmissionState,
    recent: Vec<RecentAnalysis>,
}

impl Component for ScamalyzerMain {
    type Message = Msg;
    type Properties = ();

    fn create(_: &Context<Self>) -> Self {
        Self {
            message: String::new(),
            state: SubmissionState::Idle,
            recent: content::recent_analyses(|| js_sys::Math::random(), CAROUSEL_SIZE),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateMessage(value) => {
                self.message = value;
                true
            }
            Msg::UseExample(idx) => {
                if let Some(example) = content::TRY_EXAMPLES.get(idx) {
                    self.message = example.to_string();
                    true
                } else {
                    false
                }
            }
            Msg::Submit => {
                if matches!(self.state, SubmissionState::Submitting) {
                    return false;
                }
                if validate_message(&self.message).is_err() {
                    return false;
                }
                self.state = SubmissionState::Submitting;
                let request = AnalyzeRequest { message: self.message.clone() };
                ctx.link().send_future(async move {
                    Msg::SubmissionComplete(submit_message(request).await)
                });
                true
            }
            Msg::SubmissionComplete(result) => {
                self.state = match result {
                    Ok(result) => SubmissionState::Succeeded(result),
                    Err(error) => {
                        web_sys::console::error_1(&JsValue::from_str(&format!("analyze failed: {}", error)));
                        SubmissionState::Failed(error)
                    }
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let submitting = matches!(self.state, SubmissionState::Submitting);
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::UpdateMessage(textarea.value())
        });

        html! {
            <div class={CONTAINER}>
                <h1 class={HEADING_LG}>{"Scamalyzer"}</h1>
                <p class="text-gray-300 text-center mb-6">
                    {"AI-powered detection of scam, phishing, and deceptive messages. \
                      Paste your message below and get instant analysis."}
                </p>

                {self.render_examples(ctx)}

                <form {onsubmit} aria-busy={submitting.to_string()} class={SPACE_Y_BASE}>
                    <textarea class={combine_classes(INPUT_BASE, "min-h-32")} rows="5"
                        value={self.message.clone()}
                        {oninput}
                        placeholder="Paste your message here..."
                        required={true}
                    />
                    <button type="submit" class={button_primary(true)}
                        disabled={submitting || validate_message(&self.message).is_err()}>
                        {if submitting { "Analyzing..." } else { "Analyze" }}
                    </button>
                </form>

                {self.render_result()}

                <RecentAnalysesCarousel analyses={self.recent.clone()} />
                <FaqSection faqs={&FAQS[..]} />
            </div>
        }
    }
}

impl ScamalyzerMain {
    fn render_examples(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="mb-6">
                <div class="text-gray-200 font-semibold mb-2">{"Try these examples:"}</div>
                <ul class={SPACE_Y_BASE}>
                    {for content::TRY_EXAMPLES.iter().enumerate().map(|(idx, example)| {
                        let onclick = ctx.link().callback(move |_| Msg::UseExample(idx));
                        html! {
                            <li>
                                <button type="button" {onclick}
                                    class="w-full text-left text-sm text-gray-300 bg-gray-800 hover:bg-gray-700 border border-gray-700 rounded-md px-4 py-2 transition-colors">
                                    {*example}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </div>
        }
    }

    /// Both success and failure render through the same result box; a
    /// failure is just the error verdict with zero confidence.
    fn displayed_result(&self) -> Option<AnalysisResult> {
        match &self.state {
            SubmissionState::Succeeded(result) => Some(result.clone()),
            SubmissionState::Failed(error) => Some(error.as_result()),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    fn render_result(&self) -> Html {
        let Some(result) = self.displayed_result() else {
            return html! {};
        };

        html! {
            <div class={verdict_box(result.verdict)}>
                <span class={combine_classes("text-2xl font-extrabold tracking-wide", verdict_text(result.verdict))}>
                    {result.verdict.label_upper()}
                </span>
                <div class="flex items-center justify-center gap-3 mt-3 text-gray-300">
                    <span>{"Confidence:"}</span>
                    <div class="w-40 bg-gray-700 rounded-full h-3 overflow-hidden">
                        <div class={combine_classes(&meter_fill(result.verdict), "h-3")}
                            style={format!("width: {}", result.confidence_percent())} />
                    </div>
                    <span>{result.confidence_percent()}</span>
                </div>
                {render_advice(result.verdict)}
                <div class={combine_classes(TEXT_MUTED, "mt-4 italic")}>
                    {"* Scamalyzer is an AI tool and may not be 100% accurate. Always use your best judgment."}
                </div>
            </div>
        }
    }
}

fn render_advice(verdict: Verdict) -> Html {
    let (icon, advice, link_text) = match verdict {
        Verdict::Scam => (
            "🚨",
            html! { <>{"This message appears to be a "}<b>{"scam"}</b>{". Do not click any links or share personal information."}</> },
            "Learn how to spot scams",
        ),
        Verdict::Safe => (
            "🛡️",
            html! { <>{"This message appears "}<b>{"safe"}</b>{"."}</> },
            "See tips for staying safe online",
        ),
        Verdict::Suspicious => (
            "⚠️",
            html! { <>{"This message is "}<b>{"suspicious"}</b>{". Proceed with caution."}</> },
            "How to handle suspicious messages",
        ),
        Verdict::Error => {
            return html! {
                <div class="mt-4 text-gray-300">
                    {"Sorry, something went wrong. Please try again."}
                </div>
            };
        }
    };

    html! {
        <div class="mt-4">
            <div class="text-3xl mb-2">{icon}</div>
            <div class="text-gray-200">
                {advice}
                <br />
                <Link<Route> to={Route::Education} classes="text-blue-400 hover:underline">
                    {link_text}
                </Link<Route>>
            </div>
        </div>
    }
}

async fn submit_message(request: AnalyzeRequest) -> Result<AnalysisResult, AnalyzeError> {
    let response = Request::post(&format!("{}/analyze", CONFIG.api_base_url))
        .json(&request)
        .map_err(|e| AnalyzeError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AnalyzeError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AnalyzeError::Status(response.status()));
    }

    response.json::<AnalyzeResponse>().await
        .map(AnalysisResult::from)
        .map_err(|e| AnalyzeError::Decode(e.to_string()))
}
