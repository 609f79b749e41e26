use leptos::*;
use crate::models::Credentials;

#[component]
pub fn LoginUI(on_login: Option<Callback<Credentials>>) -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    view! {
        <div class="login-page">
            <h1 class="login-title">"Billed"</h1>
            <div class="login-form-container">
                <h2>"Employé"</h2>
                <form data-testid="form-employee" on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    let credentials = Credentials { email: email.get_untracked(), password: password.get_untracked() };
                    if let Some(cb) = on_login { cb.call(credentials) }
                }>
                    <label for="employee-email-input">"Votre email"</label>
                    <input type="email" required=true data-testid="employee-email-input" placeholder="johndoe@email.com"
                        on:input=move |ev| email.set(event_target_value(&ev))/>
                    <label for="employee-password-input">"Mot de passe"</label>
                    <input type="password" required=true data-testid="employee-password-input" placeholder="******"
                        on:input=move |ev| password.set(event_target_value(&ev))/>
                    <button type="submit" class="btn btn-primary" data-testid="employee-login-button">"Se connecter"</button>
                </form>
            </div>
        </div>
    }
}
