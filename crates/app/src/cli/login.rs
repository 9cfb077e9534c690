use boutique_app::{
    context::AppContext,
    screens::{LoginOutcome, LoginScreen},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account username
    #[arg(long)]
    username: String,

    /// Account password
    #[arg(long, env = "BOUTIQUE_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn run(context: &AppContext, args: LoginArgs) -> Result<(), String> {
    let mut screen = LoginScreen::new(context.auth.clone());
    screen.username = args.username;
    screen.set_password(args.password);

    match screen.submit().await.map_err(|error| error.to_string())? {
        LoginOutcome::LoggedIn(session) => {
            println!("logged in as {}", session.username);
            println!("logged_in_at: {}", session.logged_in_at);
        }
        LoginOutcome::Ignored => println!("a login is already in progress"),
    }

    Ok(())
}
