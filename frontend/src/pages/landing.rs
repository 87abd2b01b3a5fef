use std::rc::Rc;

use yew::prelude::*;

use crate::components::faq::FaqList;
use crate::components::nav::scroll_to_section;
use crate::components::reveal::use_section_reveal;
use crate::components::simulation::SimulationSection;
use crate::components::stats::StatsBar;
use crate::config::AppConfig;
use crate::shell::Section;

struct Card {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const PROBLEMS: [&str; 4] = [
    "Successful campaigns = thinner margins",
    "More customers = less profit per sale",
    "Scaling means spending more to earn less",
    "You're winning on revenue but losing on profit",
];

const STEPS: [Card; 3] = [
    Card { icon: "📊", title: "Monitor", desc: "MCD tracks every dollar you spend on marketing and every dollar that comes back in revenue, across all your channels." },
    Card { icon: "🎯", title: "Calculate", desc: "Our algorithm analyzes your marketing efficiency in real-time, determining the true market demand for your products." },
    Card { icon: "📈", title: "Optimize", desc: "Prices automatically adjust within your set limits – rising during high-demand periods, stabilizing when needed." },
];

const FEATURES: [Card; 6] = [
    Card { icon: "⚡", title: "Invisible to Customers", desc: "Changes happen so gradually (typically 2-3% per week) that customers never experience price shock." },
    Card { icon: "🛡", title: "Safety Caps", desc: "Set a maximum increase limit (usually 15%) to ensure you never price yourself out of the market." },
    Card { icon: "🎯", title: "Channel Intelligence", desc: "Google Ads showing high intent? Bigger adjustment. Email campaign? Smaller change. MCD knows the difference." },
    Card { icon: "⏱", title: "Instant Response", desc: "Choose hourly, daily, or weekly price updates based on your business velocity." },
    Card { icon: "🔄", title: "Self-Balancing", desc: "Prices naturally settle at the perfect point between maximum profit and customer demand." },
    Card { icon: "🔒", title: "Pause Protection", desc: "When marketing underperforms, prices automatically stabilize or decrease to maintain competitiveness." },
];

const BENEFITS: [Card; 6] = [
    Card { icon: "🎯", title: "Marketing That Pays for Itself", desc: "When campaigns succeed, price increases offset advertising costs. Your customer acquisition becomes essentially free." },
    Card { icon: "📈", title: "12% Average Margin Improvement", desc: "Most businesses see profit margins increase by 12% within 90 days without losing customers." },
    Card { icon: "⚡", title: "24/7 Price Optimization", desc: "While you sleep, MCD responds to market conditions, capturing value you'd otherwise miss." },
    Card { icon: "🛡", title: "Protected During Downturns", desc: "Poor marketing performance? Prices stay stable. You're protected when you need it most." },
    Card { icon: "📊", title: "Data-Driven Confidence", desc: "Every price change is based on real market signals, not guesswork or competitor watching." },
    Card { icon: "🔄", title: "Sustainable Scaling", desc: "Finally scale your advertising without destroying your margins. Growth becomes profitable, not painful." },
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("We were spending $30K monthly on ads and barely breaking even. MCD raised our prices by just 7% during peak campaigns – that's $200K in extra profit this year from the same customers.", "Sarah Chen", "Fashion Retailer"),
    ("The beauty is it's completely automatic. When our influencer campaign went viral, MCD captured an extra $12,000 that week alone. Money we would have left on the table.", "Marcus Williams", "Fitness Brand"),
    ("I was skeptical about price changes, but they're so gradual customers don't notice. Our margins improved 15% while our review scores actually went up.", "Jennifer Park", "Home Decor"),
];

struct Plan {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    featured: bool,
    custom: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "BETA USERS",
        price: "$1800",
        features: &["Up to $10K monthly revenue", "3 marketing channels", "Daily price updates", "Email support", "Basic analytics"],
        featured: false,
        custom: false,
    },
    Plan {
        name: "EARLY ADOPTERS",
        price: "$2100",
        features: &["Up to $100K monthly revenue", "Unlimited channels", "Hourly updates", "Priority support", "Custom rules", "Advanced analytics"],
        featured: true,
        custom: false,
    },
    Plan {
        name: "POST LAUNCH",
        price: "$3100",
        features: &["Unlimited revenue", "Custom integration", "Dedicated success manager", "SLA guarantee", "API access"],
        featured: false,
        custom: true,
    },
];

fn plan_card(plan: &Plan) -> Html {
    let button_class = if plan.featured {
        "plan-button featured"
    } else if plan.custom {
        "plan-button outline"
    } else {
        "plan-button"
    };

    html! {
        <div class={classes!("plan-card", plan.featured.then(|| "featured"))}>
            {
                if plan.featured {
                    html! { <div class="plan-ribbon">{"MOST POPULAR"}</div> }
                } else {
                    html! {}
                }
            }
            <h3 class="plan-name">{plan.name}</h3>
            <div class="plan-price">
                {plan.price}
                {
                    if plan.custom {
                        html! {}
                    } else {
                        html! { <span class="plan-period">{"/month"}</span> }
                    }
                }
            </div>
            <ul class="plan-features">
                { for plan.features.iter().map(|f| html! { <li>{"✓ "}{*f}</li> }) }
            </ul>
            <button class={button_class}>
                { if plan.custom { "Contact Sales" } else { "Start Free Trial" } }
            </button>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let visible = use_section_reveal();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let see_in_action = Callback::from(|_: MouseEvent| scroll_to_section(Section::Simulation.id()));

    html! {
        <div class="landing-page">
            <div class="floating-shapes">
                <div class="floating-shape shape-1"></div>
                <div class="floating-shape shape-2"></div>
                <div class="floating-shape shape-3"></div>
            </div>

            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-fade-1">
                        {"Your Marketing Shouldn't"}<br/>
                        {"Eat Your Profits."}<br/>
                        <span class="gradient-text">{"It Should Create Them."}</span>
                    </h1>
                    <p class="hero-subtitle hero-fade-2">
                        {"Introducing Marketing Cost Displacement – The intelligent pricing engine that turns successful advertising into higher margins, automatically."}
                    </p>
                    <div class="hero-cta-group hero-fade-3">
                        <button class="hero-cta" onclick={see_in_action}>{"See MCD in Action →"}</button>
                        <button class="hero-secondary">{"Schedule Demo"}</button>
                    </div>
                    <div class="hero-points hero-fade-4">
                        <span>{"⚡ Sets up in 10 minutes"}</span>
                        <span>{"🔒 Your data stays yours"}</span>
                        <span>{"📈 12% avg margin improvement"}</span>
                    </div>
                </div>
            </header>

            <section id={Section::Problem.id()} class={classes!(visible.class_for(Section::Problem), "tinted")}>
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"The "}<span class="gradient-text">{"$50,000 Question"}</span>{" Every Business Owner Faces"}</h2>
                        <p>{"You spend $5,000 on Facebook ads. They work brilliantly – sales are pouring in. But here's the painful irony: those advertising costs just ate up most of your profit margin."}</p>
                    </div>
                    <div class="problem-card">
                        <h3>{"Right now, your business is trapped in the advertising paradox:"}</h3>
                        <ul class="problem-list">
                            { for PROBLEMS.iter().map(|p| html! { <li><span class="cross">{"✕"}</span>{*p}</li> }) }
                        </ul>
                        <p class="problem-note">
                            {"Meanwhile, your competitors face the same squeezed margins, creating a race to the bottom that nobody wins."}
                        </p>
                    </div>
                </div>
            </section>

            <section id={Section::HowItWorks.id()} class={visible.class_for(Section::HowItWorks)}>
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Intelligent Pricing in "}<span class="gradient-text">{"Three Simple Steps"}</span></h2>
                        <p>{"MCD monitors your marketing performance and automatically adjusts prices to capture proven demand"}</p>
                    </div>
                    <div class="card-grid three">
                        { for STEPS.iter().map(|c| html! {
                            <div class="step-card">
                                <div class="step-icon">{c.icon}</div>
                                <h3>{c.title}</h3>
                                <p>{c.desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Features.id()} class={classes!(visible.class_for(Section::Features), "tinted")}>
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Every Feature Built for "}<span class="gradient-text">{"Profit Protection"}</span></h2>
                        <p>{"Sophisticated technology that works silently in the background"}</p>
                    </div>
                    <div class="card-grid three">
                        { for FEATURES.iter().map(|c| html! {
                            <div class="feature-card">
                                <div class="feature-icon">{c.icon}</div>
                                <h3>{c.title}</h3>
                                <p>{c.desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Benefits.id()} class={visible.class_for(Section::Benefits)}>
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Transform Marketing from "}<span class="gradient-text">{"Cost Center to Profit Driver"}</span></h2>
                    </div>
                    <div class="card-grid three">
                        { for BENEFITS.iter().map(|c| html! {
                            <div class="benefit">
                                <div class="benefit-icon">{c.icon}</div>
                                <div>
                                    <h3>{c.title}</h3>
                                    <p>{c.desc}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <SimulationSection
                policy={config.pricing.clone()}
                sliders={config.sliders.clone()}
                schedule={config.simulation}
                reveal_class={visible.class_for(Section::Simulation)}
            />

            <section id={Section::Testimonials.id()} class={classes!(visible.class_for(Section::Testimonials), "tinted")}>
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Businesses Using MCD Are "}<span class="gradient-text">{"Capturing Hidden Profits"}</span></h2>
                    </div>
                    <div class="card-grid three">
                        { for TESTIMONIALS.iter().map(|(text, author, role)| html! {
                            <div class="testimonial">
                                <div class="stars">{"★★★★★"}</div>
                                <p class="quote">{format!("\"{}\"", text)}</p>
                                <div class="author">
                                    <div class="author-name">{*author}</div>
                                    <div class="author-role">{*role}</div>
                                </div>
                            </div>
                        }) }
                    </div>
                    <StatsBar schedule={config.counters} />
                </div>
            </section>

            <section id={Section::Pricing.id()} class={visible.class_for(Section::Pricing)}>
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Pricing That "}<span class="gradient-text">{"Pays for Itself"}</span>{" in Week One"}</h2>
                        <p>{"Choose the plan that fits your business scale"}</p>
                    </div>
                    <div class="card-grid three">
                        { for PLANS.iter().map(plan_card) }
                    </div>
                    <div class="guarantee">
                        {"✓ 30-Day Money Back Guarantee - If MCD doesn't improve your margins, you pay nothing."}
                    </div>
                </div>
            </section>

            <section id={Section::Faq.id()} class={classes!(visible.class_for(Section::Faq), "tinted")}>
                <div class="section-inner narrow">
                    <div class="section-header">
                        <h2>{"Questions? "}<span class="gradient-text">{"We've Got Answers"}</span></h2>
                    </div>
                    <FaqList />
                </div>
            </section>

            <section class="final-cta-wrapper">
                <div id={Section::FinalCta.id()} class={classes!(visible.class_for(Section::FinalCta), "final-cta")}>
                    <h2>{"Stop Letting Marketing Eat Your Profits"}</h2>
                    <p>{"Every day without MCD, you're leaving money on the table. Join 147 businesses already transforming marketing spend into profit margin."}</p>
                    <div class="hero-cta-group">
                        <button class="cta-light">{"Start Free 30-Day Trial"}</button>
                        <button class="cta-outline">{"Schedule a Demo"}</button>
                    </div>
                    <div class="cta-points">
                        <span>{"✓ No credit card required"}</span>
                        <span>{"✓ 30-day money-back guarantee"}</span>
                        <span>{"✓ Cancel anytime"}</span>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-logo gradient-text">{"MCD"}</div>
                <div class="footer-badges">
                    <span>{"🔒 SOC 2 Compliant"}</span>
                    <span>{"🛡 GDPR Ready"}</span>
                    <span>{"🔒 Bank-Level Encryption"}</span>
                </div>
                <p>{"Your pricing data never leaves your control. MCD operates on your infrastructure, ensuring complete data sovereignty."}</p>
                <p>
                    {"Questions? Talk to a pricing strategist: "}
                    <a href="mailto:team@mcd-pricing.com">{"team@mcd-pricing.com"}</a>
                </p>
                <p class="copyright">{"© 2024 MCD - Marketing Cost Displacement. All rights reserved."}</p>
            </footer>

            <style>
                {LANDING_CSS}
            </style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    min-height: 100vh;
    background: #fafbfc;
    color: #111827;
    overflow-x: hidden;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

.gradient-text {
    background: linear-gradient(135deg, #3b82f6, #9333ea);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    padding: 1.5rem 0;
    transition: all 0.3s ease;
}

.top-nav.scrolled {
    padding: 1rem 0;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(12px);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    position: relative;
}

.nav-logo { font-size: 1.875rem; font-weight: 700; }
.nav-right { display: flex; align-items: center; gap: 2rem; }
.nav-link { color: #4b5563; font-weight: 500; text-decoration: none; }
.nav-link:hover { color: #111827; }

.nav-cta, .hero-cta, .plan-button.featured, .simulate-button {
    background: linear-gradient(90deg, #3b82f6, #9333ea);
    color: white;
    border: none;
    border-radius: 9999px;
    padding: 0.75rem 2rem;
    font-weight: 600;
    cursor: pointer;
}

.burger-menu {
    display: none;
    background: none;
    border: none;
    font-size: 1.5rem;
    cursor: pointer;
}

.mobile-menu {
    position: absolute;
    top: 3rem;
    left: 0;
    right: 0;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    background: white;
    padding: 1rem;
    text-align: center;
}

@media (max-width: 768px) {
    .nav-right { display: none; }
    .burger-menu { display: block; }
}

.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 8rem 1.5rem 4rem;
    text-align: center;
}

.hero h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.1; margin-bottom: 1.5rem; }
.hero-subtitle { font-size: 1.4rem; color: #4b5563; max-width: 56rem; margin: 0 auto 3rem; }
.hero-cta-group { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; margin-bottom: 3rem; }
.hero-secondary, .plan-button.outline, .cta-outline {
    border: 2px solid #d1d5db;
    background: transparent;
    border-radius: 9999px;
    padding: 0.75rem 2rem;
    font-weight: 600;
    cursor: pointer;
}
.hero-points, .cta-points, .footer-badges { display: flex; gap: 2rem; justify-content: center; flex-wrap: wrap; color: #4b5563; }

.hero-fade-1, .hero-fade-2, .hero-fade-3, .hero-fade-4 { animation: fadeUp 0.8s ease-out both; }
.hero-fade-2 { animation-delay: 0.15s; }
.hero-fade-3 { animation-delay: 0.3s; }
.hero-fade-4 { animation-delay: 0.45s; }

@keyframes fadeUp {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

.floating-shapes { position: fixed; inset: 0; overflow: hidden; pointer-events: none; }
.floating-shape { position: absolute; border-radius: 50%; filter: blur(60px); opacity: 0.25; }
.shape-1 { width: 300px; height: 300px; background: #93c5fd; top: 10%; left: -5%; }
.shape-2 { width: 400px; height: 400px; background: #d8b4fe; top: 50%; right: -10%; }
.shape-3 { width: 250px; height: 250px; background: #f9a8d4; bottom: 5%; left: 30%; }

.scroll-reveal {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s ease, transform 0.8s ease;
    padding: 5rem 1.5rem;
}

.scroll-reveal.visible { opacity: 1; transform: translateY(0); }
.tinted { background: #f9fafb; }

.section-inner { max-width: 80rem; margin: 0 auto; }
.section-inner.narrow { max-width: 48rem; }
.section-header { text-align: center; margin-bottom: 3rem; }
.section-header h2 { font-size: clamp(2rem, 4vw, 3rem); margin-bottom: 1.5rem; }
.section-header p { font-size: 1.25rem; color: #4b5563; max-width: 48rem; margin: 0 auto; }

.card-grid { display: grid; gap: 1.5rem; }
.card-grid.three { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }

.problem-card, .step-card, .feature-card, .testimonial, .plan-card, .simulation-card, .stats-bar {
    background: white;
    border-radius: 1.5rem;
    padding: 2rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
}

.problem-list { list-style: none; padding: 0; }
.problem-list li { display: flex; gap: 1rem; align-items: center; margin-bottom: 1rem; }
.cross { color: #dc2626; background: #fee2e2; border-radius: 50%; width: 2rem; height: 2rem; display: inline-flex; align-items: center; justify-content: center; }
.problem-note { margin-top: 2rem; background: #eff6ff; padding: 1rem; border-radius: 0.75rem; color: #4b5563; }

.step-card { text-align: center; }
.step-icon, .feature-icon, .benefit-icon { font-size: 2rem; margin-bottom: 1rem; }
.benefit { display: flex; gap: 1rem; }

.simulation-section { background: linear-gradient(135deg, #eff6ff, #ffffff, #faf5ff); }
.simulation-card { max-width: 64rem; margin: 0 auto; }
.simulation-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; }
.slider-group { margin-bottom: 1.5rem; }
.slider-label { display: flex; justify-content: space-between; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
.slider { width: 100%; }
.value-blue { color: #2563eb; font-weight: 600; }
.value-green { color: #16a34a; font-weight: 600; }
.value-plain { font-weight: 600; }
.simulate-button { width: 100%; border-radius: 0.75rem; }
.simulate-button:disabled { background: #f3f4f6; color: #9ca3af; cursor: not-allowed; }
.spin { display: inline-block; animation: spin 1s linear infinite; }

@keyframes spin { to { transform: rotate(360deg); } }

.roas-panel { padding: 1rem; border-radius: 0.75rem; border: 2px solid; margin-bottom: 1.5rem; }
.roas-panel-header { display: flex; justify-content: space-between; font-size: 0.875rem; color: #4b5563; }
.roas-panel-healthy { background: #f0fdf4; border-color: #bbf7d0; }
.roas-panel-below-target { background: #fefce8; border-color: #fef08a; }
.roas-panel-critical { background: #fef2f2; border-color: #fecaca; }
.roas-value { font-size: 1.875rem; font-weight: 700; }
.roas-healthy { color: #16a34a; }
.roas-below-target { color: #ca8a04; }
.roas-critical { color: #dc2626; }
.roas-warning { color: #ca8a04; }
.roas-label { font-size: 0.875rem; color: #6b7280; }

.adjustment-panel { background: linear-gradient(135deg, #eff6ff, #faf5ff); padding: 1rem; border-radius: 0.75rem; margin-bottom: 1.5rem; }
.adjustment-row { display: flex; align-items: center; gap: 1rem; font-size: 1.5rem; font-weight: 700; }
.price-after { color: #2563eb; }
.adjustment-badge { font-size: 0.875rem; padding: 0.25rem 0.5rem; border-radius: 9999px; }
.badge-increase { background: #dcfce7; color: #15803d; }
.badge-decrease { background: #fee2e2; color: #b91c1c; }
.badge-unchanged { background: #f3f4f6; color: #374151; }

.margin-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-bottom: 1.5rem; }
.margin-card { background: #f9fafb; padding: 1rem; border-radius: 0.75rem; }
.margin-card-new { background: #f0fdf4; }
.margin-card-new .margin-value { color: #16a34a; }
.margin-value { font-size: 1.25rem; font-weight: 700; }
.panel-caption { font-size: 0.875rem; color: #4b5563; margin-bottom: 0.25rem; }
.explanation { display: flex; gap: 0.75rem; background: #eff6ff; border: 1px solid #bfdbfe; border-radius: 0.75rem; padding: 1rem; font-size: 0.875rem; color: #1e3a8a; }

.simulation-stats { margin-top: 2rem; padding-top: 2rem; border-top: 1px solid #e5e7eb; display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 1rem; text-align: center; }
.stat-value { font-size: 1.125rem; font-weight: 700; }
.stat-gain { color: #16a34a; }
.section-footnote { text-align: center; margin-top: 2rem; font-size: 1.125rem; color: #4b5563; }
.muted { color: #6b7280; }

.stars { color: #facc15; margin-bottom: 1rem; }
.quote { font-style: italic; color: #374151; margin-bottom: 1.5rem; }
.author { border-top: 1px solid #e5e7eb; padding-top: 1rem; }
.author-name { font-weight: 600; }
.author-role { font-size: 0.875rem; color: #6b7280; }

.stats-bar { margin-top: 3rem; display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 2rem; text-align: center; }
.stat-number { font-size: 2.25rem; font-weight: 700; margin-bottom: 0.5rem; }

.plan-card { text-align: center; position: relative; }
.plan-card.featured { border: 2px solid #3b82f6; transform: scale(1.05); }
.plan-ribbon { position: absolute; top: -1rem; left: 50%; transform: translateX(-50%); background: linear-gradient(90deg, #3b82f6, #9333ea); color: white; padding: 0.25rem 1rem; border-radius: 9999px; font-size: 0.875rem; font-weight: 600; }
.plan-price { font-size: 3rem; font-weight: 700; margin-bottom: 0.5rem; }
.plan-period { font-size: 1.125rem; color: #6b7280; }
.plan-features { list-style: none; padding: 0; margin: 2rem 0; color: #4b5563; line-height: 2; }
.plan-button { width: 100%; background: #f3f4f6; border: none; border-radius: 9999px; padding: 0.75rem; font-weight: 600; cursor: pointer; }
.guarantee { text-align: center; margin: 2rem auto 0; background: #f0fdf4; color: #166534; font-weight: 600; border-radius: 1rem; padding: 1.5rem; max-width: 42rem; }

.faq-list { display: flex; flex-direction: column; gap: 1rem; }
.faq-item { background: white; border-radius: 1rem; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05); overflow: hidden; }
.faq-question { width: 100%; padding: 1.5rem; background: none; border: none; text-align: left; display: flex; justify-content: space-between; align-items: center; font-size: 1.125rem; font-weight: 600; cursor: pointer; }
.toggle-icon { color: #3b82f6; font-size: 1.5rem; }
.faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease; padding: 0 1.5rem; color: #4b5563; line-height: 1.6; }
.faq-item.open .faq-answer { max-height: 24rem; padding-bottom: 1.5rem; }

.final-cta-wrapper { padding: 5rem 1.5rem; }
.final-cta { max-width: 64rem; margin: 0 auto; background: linear-gradient(135deg, #2563eb, #9333ea); border-radius: 1.5rem; padding: 3rem; color: white; text-align: center; }
.final-cta .cta-points { color: rgba(255, 255, 255, 0.9); }
.cta-light { background: white; color: #2563eb; border: none; border-radius: 9999px; padding: 1rem 2rem; font-weight: 600; cursor: pointer; }
.cta-outline { border-color: white; color: white; }

.site-footer { background: #111827; color: #9ca3af; text-align: center; padding: 3rem 1.5rem; }
.site-footer a { color: #60a5fa; font-weight: 600; }
.footer-logo { font-size: 2.25rem; font-weight: 700; margin-bottom: 2rem; }
.footer-badges { margin-bottom: 2rem; color: #9ca3af; }
.copyright { font-size: 0.875rem; color: #6b7280; }
"#;
