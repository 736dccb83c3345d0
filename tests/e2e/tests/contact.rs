use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
#[ignore = "spawns the web server and a headless browser"]
async fn test_contact_form_reaches_success_screen() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.open(server.url()).expect("Failed to open site");

    page.click_button("Contact").expect("Contact button should exist");
    page.fill("#contact-name", "Jeanne Tremblay").expect("name field");
    page.fill("#contact-email", "jeanne@example.com").expect("email field");
    page.fill("#contact-needs", "Help with video calls").expect("needs field");
    page.click("button[type='submit']").expect("submit button");

    page.wait_for_text("main h1", "Message Sent Successfully!")
        .expect("Success screen should follow the simulated delay");

    page.click_button("Return to Home").expect("home button");
    let heading = page.text_of("main h1").expect("home heading");
    assert!(heading.starts_with("Empowering Seniors"));
}
