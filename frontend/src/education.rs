use yew::prelude::*;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct TileProps {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub expanded: bool,
    pub on_expand: Callback<()>,
    pub children: Children,
}

#[function_component(EducationTile)]
pub fn education_tile(props: &TileProps) -> Html {
    let onclick = {
        let on_expand = props.on_expand.clone();
        Callback::from(move |_| on_expand.emit(()))
    };

    html! {
        <div class={CARD}>
            <button type="button" {onclick}
                aria-expanded={props.expanded.to_string()}
                class="w-full flex justify-between items-center text-left">
                <span class="text-lg font-semibold text-gray-100">{props.title}</span>
                <span class="text-gray-400 ml-4 shrink-0" aria-hidden="true">
                    {if props.expanded { "▲ Hide details" } else { "▼ Show details" }}
                </span>
            </button>
            <div class={combine_classes(TEXT_MUTED, "mt-2")}>{props.subtitle}</div>
            {if props.expanded {
                html! { <div class="mt-4 text-gray-300">{for props.children.iter()} </div> }
            } else { html! {} }}
        </div>
    }
}

fn tip(lead: &'static str, detail: &'static str) -> Html {
    html! {
        <li>
            <strong class="text-gray-200">{lead}</strong>{" "}{detail}
        </li>
    }
}

fn tip_with_example(lead: &'static str, detail: &'static str, example: &'static str) -> Html {
    html! {
        <li>
            <strong class="text-gray-200">{lead}</strong>{" "}{detail}
            <span class={combine_classes(TEXT_MUTED, "block italic")}>{example}</span>
        </li>
    }
}

fn resource(href: &'static str, label: &'static str) -> Html {
    html! {
        <li>
            <a href={href} target="_blank" rel="noopener noreferrer"
                class="text-blue-400 hover:underline">
                {label}
            </a>
        </li>
    }
}

#[function_component(EducationPage)]
pub fn education_page() -> Html {
    let expanded = use_state(|| None::<usize>);

    // One open tile at a time; clicking the open header closes it.
    let toggle = |idx: usize| {
        let expanded = expanded.clone();
        Callback::from(move |_| {
            expanded.set(if *expanded == Some(idx) { None } else { Some(idx) });
        })
    };

    html! {
        <div class={CONTAINER_WIDE}>
            <h1 class={HEADING_LG}>{"How to stay safe online?"}</h1>
            <p class="text-gray-300 text-center mb-8 max-w-3xl mx-auto">
                {"Scamalyzer helps you spot and avoid online scams, phishing, and deceptive messages. \
                  These tips are written for everyone, no matter your experience with computers or the internet."}
            </p>

            <section class={combine_classes(SPACE_Y_LG, "max-w-3xl mx-auto")}>
                <EducationTile
                    title="How to recognize a scam"
                    subtitle="Learn the warning signs of scams in messages, emails, calls, and online posts."
                    expanded={*expanded == Some(0)}
                    on_expand={toggle(0)}>
                    <ul class={combine_classes(SPACE_Y_BASE, "list-disc pl-6")}>
                        {tip_with_example("Urgency and threats:",
                            "Scammers often say you must act quickly or something bad will happen.",
                            "Example: \u{201c}Your account will be closed in 24 hours unless you act now.\u{201d}")}
                        {tip_with_example("Strange links:",
                            "Be careful with links you don't recognize. If you're unsure, don't click.",
                            "Example: Links like \u{201c}secure-bank-login.com\u{201d} instead of your real bank.")}
                        {tip_with_example("Unusual requests:",
                            "If someone asks for money, gift cards, or personal information, be cautious.",
                            "Example: \u{201c}Please buy gift cards and send me the codes.\u{201d}")}
                        {tip_with_example("Spelling and grammar mistakes:",
                            "Many scam messages have errors or sound odd.",
                            "Example: \u{201c}Congratulation! You has win.\u{201d}")}
                        {tip_with_example("Too good to be true:",
                            "If an offer seems unbelievable, it probably isn't real.",
                            "Example: \u{201c}You've won a $1,000 gift card!\u{201d}")}
                        {tip_with_example("Phone call scams:",
                            "Watch out for robocalls, fake tech support, or government calls.",
                            "Example: \u{201c}This is the IRS. You owe money and must pay now.\u{201d}")}
                        {tip("Verify requests:",
                            "If you're unsure, contact the company directly using their official website or phone number.")}
                    </ul>
                </EducationTile>

                <EducationTile
                    title="How to handle suspicious messages"
                    subtitle="Know what to do if you get a message that seems off or makes you uncomfortable."
                    expanded={*expanded == Some(1)}
                    on_expand={toggle(1)}>
                    <ul class={combine_classes(SPACE_Y_BASE, "list-disc pl-6")}>
                        {tip_with_example("Don't reply:",
                            "Ignore messages that seem suspicious. Take a screenshot if you want to report it.",
                            "Tip: Save evidence before deleting.")}
                        {tip("Don't click links or open attachments:", "These can be dangerous.")}
                        {tip("Block the sender:", "Stop further messages by blocking the sender.")}
                        {tip("Report the message:",
                            "Use the \u{201c}Report spam\u{201d} or \u{201c}Report phishing\u{201d} option in your email or messaging app.")}
                        {tip("Check with the official organization:",
                            "If a message claims to be from your bank or another company, contact them using their official website or phone number before deleting.")}
                        {tip("Real companies won't ask for sensitive info:",
                            "Legitimate businesses will never ask for your password or bank details by email or text.")}
                        {tip("Ask someone you trust:",
                            "If you're unsure, talk to a friend or family member.")}
                    </ul>
                </EducationTile>

                <EducationTile
                    title="Smart online habits"
                    subtitle="Protect yourself every day with these simple habits."
                    expanded={*expanded == Some(2)}
                    on_expand={toggle(2)}>
                    <ul class={combine_classes(SPACE_Y_BASE, "list-disc pl-6")}>
                        {tip("Be careful with personal information:",
                            "Don't share your passwords, bank details, or address unless you're sure it's safe.")}
                        {tip_with_example("Use strong passwords:",
                            "Make your passwords hard to guess and don't use the same one everywhere.",
                            "Example: Use \u{201c}Turtle!Rainbow!2025\u{201d} instead of \u{201c}password123\u{201d}.")}
                        {tip("Use a password manager:",
                            "These tools help you create and remember strong, unique passwords for every site.")}
                        {tip("Keep your devices updated:", "Updates help protect you from new threats.")}
                        {tip("Turn on two-step verification:", "This adds extra security to your accounts.")}
                        {tip("Be careful on public Wi-Fi:",
                            "Avoid logging into important accounts on free public Wi-Fi unless you use a VPN.")}
                        {tip_with_example("Watch out on social media:",
                            "Be cautious of fake giveaways, job offers, or online stores.",
                            "Example: \u{201c}You've won a free iPhone! Click here.\u{201d}")}
                    </ul>
                </EducationTile>

                <EducationTile
                    title="If you think you've been scammed"
                    subtitle="Don't panic, anyone can fall for a scam. Here's what to do next."
                    expanded={*expanded == Some(3)}
                    on_expand={toggle(3)}>
                    <ul class={combine_classes(SPACE_Y_BASE, "list-disc pl-6")}>
                        {tip("Don't be embarrassed:", "Scams can happen to anyone.")}
                        {tip("Stop all contact:", "Don't reply to the scammer anymore.")}
                        {tip("Change your passwords:", "If you shared any, change them right away.")}
                        {tip("Contact your bank:",
                            "If you sent money or shared bank details, call your bank as soon as possible.")}
                        {tip("Check your credit report / freeze credit:",
                            "If you shared ID details, consider checking your credit or freezing it (especially in the US).")}
                        {tip("Report the scam:",
                            "Tell your local authorities or use official websites (see resources below).")}
                        {tip("Ask for help:",
                            "Talk to someone you trust or get support from organizations that help scam victims.")}
                        {tip("Take care of your mental health:",
                            "Scams can be upsetting. It's okay to seek emotional support.")}
                    </ul>
                </EducationTile>

                <EducationTile
                    title="Helpful resources"
                    subtitle="Find more tips, guides, and support from trusted organizations."
                    expanded={*expanded == Some(4)}
                    on_expand={toggle(4)}>
                    <div class={SPACE_Y_BASE}>
                        <div>
                            <strong class="text-gray-200">{"Practical guides:"}</strong>
                            <ul class="list-disc pl-6 mt-1">
                                {resource("https://staysafeonline.org/",
                                    "StaySafeOnline.org: Simple advice for everyone")}
                                {resource("https://www.consumer.ftc.gov/articles/how-recognize-and-avoid-phishing-scams",
                                    "FTC: How to recognize and avoid phishing scams")}
                                {resource("https://www.ncsc.gov.uk/collection/phishing-scams",
                                    "UK National Cyber Security Centre: Phishing Scams")}
                                {resource("https://www.getsafeonline.org/",
                                    "Get Safe Online: Internet safety advice")}
                            </ul>
                        </div>
                        <div>
                            <strong class="text-gray-200">{"Support and recovery:"}</strong>
                            <ul class="list-disc pl-6 mt-1">
                                {resource("https://cybercrimesupport.org/",
                                    "Cybercrime Support Network (US)")}
                                {resource("https://fraudadvisorypanel.org/",
                                    "Fraud Advisory Panel (UK)")}
                                {resource("https://www.victimsupport.org.uk/",
                                    "Victim Support UK")}
                            </ul>
                        </div>
                        <div>
                            <strong class="text-gray-200">{"For older adults:"}</strong>
                            <ul class="list-disc pl-6 mt-1">
                                {resource("https://www.aarp.org/money/scams-fraud/",
                                    "AARP Fraud Watch Network")}
                            </ul>
                        </div>
                        <div>
                            <strong class="text-gray-200">{"For students and young people:"}</strong>
                            <ul class="list-disc pl-6 mt-1">
                                {resource("https://www.foolprooffoundation.org/",
                                    "FoolProof Foundation: Scam-Smart Education")}
                                {resource("https://information-services.ed.ac.uk/help-consultancy/is-skills/digital-safety-wellbeing-and-citizenship/fraud-awareness-resources",
                                    "University of Edinburgh: Student Fraud Awareness")}
                            </ul>
                        </div>
                        <em class={TEXT_MUTED}>
                            {"Outside the US/UK? Check your local government website for scam reporting and advice."}
                        </em>
                    </div>
                </EducationTile>
            </section>
        </div>
    }
}
