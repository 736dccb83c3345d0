//! English strings.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About Us"),
    ("nav.services", "Services"),
    ("nav.workshops", "Workshops"),
    ("nav.contact", "Contact"),
    ("nav.language", "Français"),
    ("nav.switch_language", "Switch to French"),
    ("nav.brand_label", "SeniorTech Home"),
    ("nav.skip", "Skip to main content"),
    ("nav.menu_toggle", "Toggle mobile menu"),
    // Hero
    ("hero.title", "Empowering Seniors with Technology and AI — One Step at a Time."),
    ("hero.subtitle", "We help older adults in Montreal use digital tools and AI confidently — online or in person."),
    ("hero.cta.primary", "Book a Free Session"),
    ("hero.cta.secondary", "Learn More"),
    ("hero.cta.description", "Book a free consultation to get personalized help with technology and AI"),
    ("hero.image_alt", "Older adult smiling and enjoying using a computer at home"),
    // Home
    ("home.services.view_all", "View All Services"),
    ("home.about.expert", "Expert Team"),
    ("home.about.human", "Human-Centered"),
    ("home.about.safe", "Safe & Secure"),
    ("home.about.meet", "Meet Our Team"),
    ("home.about.image_alt", "Diverse team of technology professionals working together"),
    // Services
    ("services.title", "Our Services"),
    ("services.subtitle", "Comprehensive tech support designed specifically for seniors"),
    ("services.digital.title", "Digital Literacy & Tech Help"),
    ("services.digital.desc", "Master your devices, stay safe online, and handle essential digital tasks with confidence."),
    ("services.digital.item1", "Setting up phones, tablets, and computers"),
    ("services.digital.item2", "Email, video calls, and messaging"),
    ("services.digital.item3", "Online banking and shopping safely"),
    ("services.digital.item4", "Password management and security"),
    ("services.ai.title", "AI for Daily Life"),
    ("services.ai.desc", "Learn to use AI tools like ChatGPT to simplify your daily tasks and stay informed."),
    ("services.ai.item1", "Introduction to ChatGPT and voice assistants"),
    ("services.ai.item2", "AI for writing emails and summaries"),
    ("services.ai.item3", "Understanding how AI works"),
    ("services.ai.item4", "Spotting AI scams and misinformation"),
    ("services.card.device.title", "Device Setup & Basics"),
    ("services.card.device.desc", "Learn to set up and navigate your smartphone, tablet, or computer with confidence."),
    ("services.card.video.title", "Video Calls & Communication"),
    ("services.card.video.desc", "Master Zoom, Skype, FaceTime, and other video calling platforms to stay connected."),
    ("services.card.banking.title", "Online Banking & Shopping"),
    ("services.card.banking.desc", "Safely manage your finances and shop online with secure practices."),
    ("services.card.passwords.title", "Password & Security Management"),
    ("services.card.passwords.desc", "Create strong passwords, use password managers, and protect your accounts."),
    ("services.card.chatgpt.title", "ChatGPT & AI Assistants"),
    ("services.card.chatgpt.desc", "Learn to use AI tools like ChatGPT for writing, planning, and answering questions."),
    ("services.card.daily.title", "AI for Daily Tasks"),
    ("services.card.daily.desc", "Use AI to help write emails, create shopping lists, and summarize information."),
    ("services.card.understanding.title", "AI Safety & Understanding"),
    ("services.card.understanding.desc", "Understand how AI works and learn to identify AI-generated content."),
    ("services.card.scams.title", "Scam & Misinformation Detection"),
    ("services.card.scams.desc", "Recognize AI-generated scams, deepfakes, and misinformation to stay safe."),
    ("services.approach.title", "Our Approach"),
    ("services.approach.personal.title", "Personalized Learning"),
    ("services.approach.personal.desc", "We adapt our teaching style to your learning pace and preferences, ensuring you feel comfortable and confident."),
    ("services.approach.hands_on.title", "Hands-On Practice"),
    ("services.approach.hands_on.desc", "Learn by doing with guided practice sessions using your own devices in a safe, supportive environment."),
    ("services.approach.support.title", "Ongoing Support"),
    ("services.approach.support.desc", "Get continued assistance with follow-up sessions and email support to reinforce your learning."),
    ("services.approach.safety.title", "Safety First"),
    ("services.approach.safety.desc", "Every lesson includes security best practices to keep you safe online and protect your personal information."),
    ("services.approach.image_alt", "Personalized technology learning session"),
    ("services.pricing.title", "Simple, Transparent Pricing"),
    ("services.pricing.subtitle", "All sessions include personalized instruction, hands-on practice, and follow-up support materials."),
    ("services.pricing.free.title", "Free Consultation"),
    ("services.pricing.free.price", "$0"),
    ("services.pricing.free.desc", "30-minute session to understand your needs and create a personalized learning plan."),
    ("services.pricing.free.item1", "Needs assessment"),
    ("services.pricing.free.item2", "Custom learning plan"),
    ("services.pricing.free.item3", "No commitment required"),
    ("services.pricing.individual.title", "Individual Sessions"),
    ("services.pricing.individual.price", "$60/hr"),
    ("services.pricing.individual.desc", "One-on-one personalized instruction tailored to your specific needs and goals."),
    ("services.pricing.individual.item1", "Personalized instruction"),
    ("services.pricing.individual.item2", "Your own device"),
    ("services.pricing.individual.item3", "Online or in-person"),
    ("services.pricing.group.title", "Group Workshops"),
    ("services.pricing.group.price", "$25/person"),
    ("services.pricing.group.desc", "Small group sessions at community centers and libraries across Montreal."),
    ("services.pricing.group.item1", "Small groups (4-8 people)"),
    ("services.pricing.group.item2", "Community locations"),
    ("services.pricing.group.item3", "Social learning environment"),
    ("services.pricing.cta", "Book Your Free Consultation"),
    // About
    ("about.title", "About SeniorTech"),
    ("about.subtitle", "A Montreal-based team dedicated to empowering seniors with technology"),
    ("about.desc", "We are a multidisciplinary team of engineers, AI specialists, designers, and community workers. We combine deep technical knowledge with human-centered service to help older adults navigate the digital world safely and confidently."),
    ("about.mission.title", "Our Mission"),
    ("about.mission.body", "Founded in Montreal, we believe that age should never be a barrier to embracing technology. Our patient, personalized approach ensures every senior can confidently navigate the digital world and harness the power of AI to enhance their daily lives."),
    ("about.mission.image_alt", "Team collaboration and mentorship"),
    ("about.values.title", "Our Values"),
    ("about.values.human.title", "Human-Centered"),
    ("about.values.human.desc", "Every interaction is designed around respect, patience, and understanding of unique learning needs."),
    ("about.values.empathy.title", "Empathy First"),
    ("about.values.empathy.desc", "We understand technology anxiety and create safe, supportive learning environments."),
    ("about.values.safety.title", "Safety & Security"),
    ("about.values.safety.desc", "Digital safety and privacy protection are integrated into every lesson and recommendation."),
    ("about.values.excellence.title", "Excellence"),
    ("about.values.excellence.desc", "We combine deep technical expertise with proven educational methods for the best outcomes."),
    ("about.team.title", "Meet Our Team"),
    ("about.team.sarah.role", "Founder & AI Specialist"),
    ("about.team.sarah.bio", "PhD in Artificial Intelligence, 10+ years in ethical AI development. Passionate about making AI accessible and beneficial for all ages."),
    ("about.team.marie.role", "Community Relations"),
    ("about.team.marie.bio", "Former social worker with 15 years experience serving Montreal's senior community. Bilingual advocate for digital inclusion."),
    ("about.team.david.role", "Tech Education Lead"),
    ("about.team.david.bio", "Former software engineer turned educator. Specializes in making complex technology concepts simple and approachable."),
    ("about.partners.title", "Community Partners"),
    ("about.partners.intro", "We're proud to collaborate with Montreal's leading community organizations to bring technology education directly to seniors across the city."),
    ("about.partners.atwater", "Weekly workshops and one-on-one sessions"),
    ("about.partners.yellow_door", "Community events and group learning"),
    ("about.partners.ndg", "Regular AI literacy workshops"),
    ("about.partners.westmount", "Monthly tech help sessions"),
    ("about.partners.cta", "Get in Touch"),
    // Workshops
    ("workshops.title", "Workshops & Community Events"),
    ("workshops.subtitle", "Join our group sessions at libraries and senior centers across Montreal"),
    ("workshops.upcoming", "Upcoming Workshops"),
    ("workshops.spots_left", "spots left"),
    ("workshops.full", "Full"),
    ("workshops.max", "Max"),
    ("workshops.participants", "participants"),
    ("workshops.register", "Register Now - $25"),
    ("workshops.register_full", "Workshop Full"),
    ("workshops.chatgpt.title", "Getting Started with ChatGPT"),
    ("workshops.chatgpt.desc", "Learn to use ChatGPT safely for writing emails, getting information, and daily tasks."),
    ("workshops.online_safety.title", "Online Safety for Seniors"),
    ("workshops.online_safety.desc", "Essential tips for avoiding scams, protecting personal information, and safe browsing."),
    ("workshops.smartphone.title", "Smartphone Basics Workshop"),
    ("workshops.smartphone.desc", "Master your smartphone: calls, texts, photos, apps, and essential settings."),
    ("workshops.series.title", "Multi-Session Learning Series"),
    ("workshops.series.subtitle", "Dive deeper with our comprehensive learning series designed to build skills progressively over multiple sessions."),
    ("workshops.series.sessions", "Sessions"),
    ("workshops.series.topics", "Topics Covered:"),
    ("workshops.series.per_series", "/series"),
    ("workshops.series.learn_more", "Learn More"),
    ("workshops.series.ai.title", "AI for Daily Life"),
    ("workshops.series.ai.desc", "Complete introduction to artificial intelligence tools and how they can help with everyday tasks."),
    ("workshops.series.ai.topic1", "Understanding AI: What it is and how it works"),
    ("workshops.series.ai.topic2", "ChatGPT for writing and planning"),
    ("workshops.series.ai.topic3", "Voice assistants (Siri, Alexa, Google)"),
    ("workshops.series.ai.topic4", "Detecting AI scams and misinformation"),
    ("workshops.series.digital.title", "Digital Essentials"),
    ("workshops.series.digital.desc", "Comprehensive digital literacy covering all essential online skills for modern life."),
    ("workshops.series.digital.topic1", "Device setup and basic navigation"),
    ("workshops.series.digital.topic2", "Email and video calling"),
    ("workshops.series.digital.topic3", "Online banking and shopping"),
    ("workshops.series.digital.topic4", "Password management and security"),
    ("workshops.series.digital.topic5", "Government and healthcare portals"),
    ("workshops.series.digital.topic6", "Social media basics and safety"),
    ("workshops.series.safety.title", "Staying Safe Online"),
    ("workshops.series.safety.desc", "Focus on security, privacy, and avoiding online threats and scams."),
    ("workshops.series.safety.topic1", "Recognizing and avoiding scams"),
    ("workshops.series.safety.topic2", "Password security and two-factor authentication"),
    ("workshops.series.safety.topic3", "Privacy settings and personal information protection"),
    ("workshops.expect.title", "What to Expect"),
    ("workshops.expect.small_groups.title", "Small Groups"),
    ("workshops.expect.small_groups.desc", "Maximum 8-10 participants for personalized attention"),
    ("workshops.expect.hands_on.title", "Hands-On Learning"),
    ("workshops.expect.hands_on.desc", "Bring your own device and practice in real-time"),
    ("workshops.expect.patient.title", "Patient Instruction"),
    ("workshops.expect.patient.desc", "We go at your pace with plenty of time for questions"),
    ("workshops.expect.materials.title", "Take-Home Materials"),
    ("workshops.expect.materials.desc", "Written guides and resources to continue learning"),
    ("workshops.expect.image_alt", "Seniors learning together in a workshop setting"),
    ("workshops.ready.title", "Ready to Join a Workshop?"),
    ("workshops.ready.body", "Register for upcoming workshops or inquire about private group sessions for your organization."),
    ("workshops.ready.register", "Register for Workshop"),
    ("workshops.ready.private", "Request Private Session"),
    // Calendar
    ("month.1", "January"),
    ("month.2", "February"),
    ("month.3", "March"),
    ("month.4", "April"),
    ("month.5", "May"),
    ("month.6", "June"),
    ("month.7", "July"),
    ("month.8", "August"),
    ("month.9", "September"),
    ("month.10", "October"),
    ("month.11", "November"),
    ("month.12", "December"),
    // Contact
    ("contact.title", "Get Started Today"),
    ("contact.subtitle", "Book your free consultation or ask us any questions"),
    ("contact.form.heading", "Book Your Free Consultation"),
    ("contact.form.name", "Your Name"),
    ("contact.form.name_ph", "Enter your full name"),
    ("contact.form.email", "Email Address"),
    ("contact.form.email_ph", "your.email@example.com"),
    ("contact.form.phone", "Phone Number"),
    ("contact.form.phone_ph", "(514) 123-4567"),
    ("contact.form.language", "Preferred Language"),
    ("contact.form.language.en", "English"),
    ("contact.form.language.fr", "French"),
    ("contact.form.needs", "What would you like help with?"),
    ("contact.form.needs_ph", "Tell us what you'd like help with - setting up devices, learning about AI, online safety, etc."),
    ("contact.form.submit", "Send Message"),
    ("contact.form.sending", "Sending..."),
    ("contact.form.missing", "Please fill in this required field:"),
    ("contact.info.title", "Get in Touch"),
    ("contact.info.email", "Email"),
    ("contact.info.phone", "Phone"),
    ("contact.info.area", "Service Area"),
    ("contact.info.area_value", "Montreal, Quebec"),
    ("contact.info.area_detail", "Online & In-Person"),
    ("contact.info.response", "Response Time"),
    ("contact.info.response_value", "Within 24 hours"),
    ("contact.info.response_days", "Monday - Friday"),
    ("contact.map.title", "We Serve Montreal"),
    ("contact.map.soon", "Interactive map coming soon"),
    ("contact.map.boroughs", "Currently serving all Montreal boroughs"),
    ("contact.map.online", "Online sessions available province-wide"),
    ("contact.success.title", "Message Sent Successfully!"),
    ("contact.success.body", "Thank you for reaching out. We'll get back to you within 24 hours to schedule your free consultation."),
    ("contact.success.home", "Return to Home"),
    // Footer
    ("footer.mission", "Empowering seniors with technology and AI, one step at a time."),
    ("footer.location", "Montreal, Quebec"),
    ("footer.quick_links", "Quick Links"),
    ("footer.resources", "Resources"),
    ("footer.privacy", "Privacy Policy"),
    ("footer.terms", "Terms of Use"),
    ("footer.newsletter", "Newsletter"),
    ("footer.follow", "Follow Us"),
    ("footer.follow.facebook", "Follow us on Facebook"),
    ("footer.follow.twitter", "Follow us on Twitter"),
    ("footer.follow.linkedin", "Follow us on LinkedIn"),
    ("footer.copyright", "© 2024 SeniorTech. All rights reserved."),
    ("footer.made_with", "Made with ❤️ for Montreal seniors"),
];
