use yew::prelude::*;
use shared::quiz::{QuizError, QuizSession, ROUND_COUNT};
use crate::content::quiz_pool;
use crate::styles::*;

pub enum Msg {
    Guess(bool),
    Next,
    Restart,
}

/// Five-round guessing game over the static example pool. All game rules
/// live in `shared::quiz`; this component only renders and forwards events.
pub struct ScamQuiz {
    session: Result<QuizSession, QuizError>,
}

fn new_session() -> Result<QuizSession, QuizError> {
    QuizSession::sample(&quiz_pool(), || js_sys::Math::random())
}

impl Component for ScamQuiz {
    type Message = Msg;
    type Properties = ();

    fn create(_: &Context<Self>) -> Self {
        Self { session: new_session() }
    }

    fn update(&mut self, _: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Guess(guess) => match &mut self.session {
                Ok(session) => session.answer(guess).is_some(),
                Err(_) => false,
            },
            Msg::Next => match &mut self.session {
                Ok(session) => session.next(),
                Err(_) => false,
            },
            Msg::Restart => {
                self.session = new_session();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.session {
            Err(_) => html! {
                <div class={alert_style("error")}>
                    {"The quiz is unavailable right now: not enough examples to play."}
                </div>
            },
            Ok(session) if session.finished() => self.render_summary(ctx, session),
            Ok(session) => self.render_round(ctx, session),
        };

        html! {
            <div class={CONTAINER}>
                <h1 class={HEADING_LG}>{"Scam Spotting Quiz"}</h1>
                <p class="text-gray-300 text-center mb-6">
                    {"Can you spot the scam? For each message, choose whether you think it's a scam or safe."}
                </p>
                {body}
            </div>
        }
    }
}

impl ScamQuiz {
    fn render_round(&self, ctx: &Context<Self>, session: &QuizSession) -> Html {
        let answered = session.is_answered();
        let example = session.current_example();
        let guess = session.current_guess();

        let guess_button = |label: &'static str, value: bool| {
            let onclick = ctx.link().callback(move |_| Msg::Guess(value));
            let selected = guess == Some(value);
            let classes = combine_classes(
                BUTTON_BASE,
                if selected {
                    "bg-purple-700 ring-2 ring-purple-400"
                } else {
                    "bg-blue-600 hover:bg-blue-700"
                },
            );
            html! {
                <button type="button" {onclick} disabled={answered} class={classes}>
                    {label}
                </button>
            }
        };

        html! {
            <div class={SPACE_Y_LG}>
                <div class={CARD}>
                    <strong class="text-gray-200">
                        {format!("Round {} of {}:", session.current_round() + 1, ROUND_COUNT)}
                    </strong>
                    <div class="mt-3 text-lg text-gray-300 break-words">{&example.text}</div>
                </div>

                <div class="flex justify-center gap-4">
                    {guess_button("Scam", true)}
                    {guess_button("Safe", false)}
                </div>

                {if answered {
                    let correct = guess == Some(example.is_scam);
                    html! {
                        <div class={combine_classes(CARD, "text-center")}>
                            <span class="text-gray-300">{"Correct answer: "}</span>
                            <span class={if example.is_scam { "text-red-400 font-semibold" } else { "text-green-400 font-semibold" }}>
                                {if example.is_scam { "Scam" } else { "Safe" }}
                            </span>
                            <br />
                            {if correct {
                                html! { <span class="text-green-400">{"You got it right!"}</span> }
                            } else {
                                html! { <span class="text-red-400">{"You got it wrong."}</span> }
                            }}
                        </div>
                    }
                } else { html! {} }}

                <div class="flex justify-center">
                    <button type="button" class={button_primary(false)}
                        disabled={!answered}
                        onclick={ctx.link().callback(|_| Msg::Next)}>
                        {if session.is_last_round() { "Finish Quiz" } else { "Next" }}
                    </button>
                </div>

                <div class={combine_classes(TEXT_MUTED, "text-center")}>
                    {format!("Score: {} / {}", session.score(), session.answers().len())}
                </div>
            </div>
        }
    }

    fn render_summary(&self, ctx: &Context<Self>, session: &QuizSession) -> Html {
        let score = session.score();
        let score_color = if score >= 4 {
            "text-green-400"
        } else if score >= 2 {
            "text-yellow-400"
        } else {
            "text-red-400"
        };

        html! {
            <div class={SPACE_Y_LG}>
                <h2 class={combine_classes("text-2xl font-bold text-center", score_color)}>
                    {format!("Final Score: {} / {}", score, ROUND_COUNT)}
                </h2>
                <ol class={combine_classes(SPACE_Y_BASE, "list-decimal list-inside")}>
                    {for session.examples().iter().enumerate().map(|(idx, example)| {
                        let your_answer = session.answers().get(idx).copied();
                        let correct = your_answer == Some(example.is_scam);
                        html! {
                            <li class={CARD}>
                                <strong class="text-gray-200 break-words">{&example.text}</strong>
                                <br />
                                <span class="text-gray-400">{"Correct: "}</span>
                                <span class={if example.is_scam { "text-red-400" } else { "text-green-400" }}>
                                    {if example.is_scam { "Scam" } else { "Safe" }}
                                </span>
                                <br />
                                <span class="text-gray-400">{"Your answer: "}</span>
                                <span class={if correct { "text-green-400" } else { "text-red-400" }}>
                                    {match your_answer {
                                        None => "No answer",
                                        Some(true) => "Scam",
                                        Some(false) => "Safe",
                                    }}
                                </span>
                            </li>
                        }
                    })}
                </ol>
                <div class="flex justify-center">
                    <button type="button" class={button_primary(false)}
                        onclick={ctx.link().callback(|_| Msg::Restart)}>
                        {"Play Again"}
                    </button>
                </div>
            </div>
        }
    }
}
