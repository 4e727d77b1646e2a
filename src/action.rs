use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use subscription_flow::{
    api::submission::SubscriptionSubmissionFlow,
    config::{self, ErrorMessagePolicy},
    front::{navigation, views::AddSubscriptionView},
    models::card::{CardFields, CardFormInput},
    services,
};

#[derive(Args, Debug, Clone)]
pub struct SubscribeArgs {
    /// Card number, spaces allowed
    #[arg(short, long)]
    number: String,
    /// Expiry as MM/YY
    #[arg(short, long)]
    expiry: String,
    #[arg(short, long)]
    cvc: String,
    /// Overrides ERROR_MESSAGE_POLICY
    #[arg(long)]
    error_policy: Option<ErrorMessagePolicy>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    /// Submits one subscription request with the given card
    Subscribe(SubscribeArgs),
    /// Lists the navigation tabs
    Tabs,
}

/// Drives the add subscription screen from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct AppArgs {
    #[command(subcommand)]
    pub action: Action,

    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl AppArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        match &self.action {
            Action::Subscribe(args) => subscribe(args).await,
            Action::Tabs => {
                for tab in navigation::TABS {
                    println!(
                        "{route}\t{label}\ttab bar {visibility}",
                        route = tab.route,
                        label = tab.label,
                        visibility = if tab.tab_bar_visible { "shown" } else { "hidden" }
                    );
                }
                Ok(())
            }
        }
    }
}

async fn subscribe(args: &SubscribeArgs) -> anyhow::Result<()> {
    let app_config = &*config::APP_CONFIG;
    let policy = args.error_policy.unwrap_or(app_config.error_message_policy);

    let flow = SubscriptionSubmissionFlow::new(
        Box::new(services::tokenizer::HttpTokenizer::from_config(app_config)),
        services::subscription_service_from_config(app_config),
        Box::new(navigation::TerminalNavigator),
        policy,
    );

    let values = CardFields::new(&args.number, &args.expiry, &args.cvc);
    let input = CardFormInput {
        valid: !values.number_digits().is_empty()
            && !values.expiry.trim().is_empty()
            && !values.cvc.trim().is_empty(),
        values,
    };

    println!("{}", AddSubscriptionView::new(&flow.state(), input.valid).render()?);

    let outcome = flow.submit_form(&input).await;

    println!("{}", AddSubscriptionView::new(&flow.state(), input.valid).render()?);

    outcome
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e.user_message(policy)))
}
