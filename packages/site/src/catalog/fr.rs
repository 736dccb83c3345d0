//! Chaînes françaises.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Accueil"),
    ("nav.about", "À propos"),
    ("nav.services", "Services"),
    ("nav.workshops", "Ateliers"),
    ("nav.contact", "Contact"),
    ("nav.language", "English"),
    ("nav.switch_language", "Passer à l'anglais"),
    ("nav.brand_label", "Accueil SeniorTech"),
    ("nav.skip", "Aller au contenu principal"),
    ("nav.menu_toggle", "Ouvrir ou fermer le menu"),
    // Hero
    ("hero.title", "Accompagner les aînés dans le monde numérique et l'intelligence artificielle – pas à pas."),
    ("hero.subtitle", "Nous aidons les personnes âgées de Montréal à utiliser les outils numériques et l'IA en toute confiance — en ligne ou en personne."),
    ("hero.cta.primary", "Réservez une session gratuite"),
    ("hero.cta.secondary", "En savoir plus"),
    ("hero.cta.description", "Réservez une consultation gratuite pour obtenir une aide personnalisée avec la technologie et l'IA"),
    ("hero.image_alt", "Une personne âgée souriante qui utilise un ordinateur à la maison"),
    // Home
    ("home.services.view_all", "Voir tous les services"),
    ("home.about.expert", "Équipe experte"),
    ("home.about.human", "Approche humaine"),
    ("home.about.safe", "Sûr et sécurisé"),
    ("home.about.meet", "Rencontrez notre équipe"),
    ("home.about.image_alt", "Une équipe diversifiée de professionnels de la technologie au travail"),
    // Services
    ("services.title", "Nos Services"),
    ("services.subtitle", "Support technologique complet conçu spécifiquement pour les aînés"),
    ("services.digital.title", "Littératie numérique et aide technologique"),
    ("services.digital.desc", "Maîtrisez vos appareils, naviguez en sécurité en ligne et gérez vos tâches numériques essentielles avec confiance."),
    ("services.digital.item1", "Configuration de téléphones, tablettes et ordinateurs"),
    ("services.digital.item2", "Email, appels vidéo et messagerie"),
    ("services.digital.item3", "Banque en ligne et achats sécurisés"),
    ("services.digital.item4", "Gestion des mots de passe et sécurité"),
    ("services.ai.title", "IA pour la vie quotidienne"),
    ("services.ai.desc", "Apprenez à utiliser des outils d'IA comme ChatGPT pour simplifier vos tâches quotidiennes et rester informé."),
    ("services.ai.item1", "Introduction à ChatGPT et aux assistants vocaux"),
    ("services.ai.item2", "IA pour rédiger des emails et des résumés"),
    ("services.ai.item3", "Comprendre comment fonctionne l'IA"),
    ("services.ai.item4", "Détecter les arnaques IA et la désinformation"),
    ("services.card.device.title", "Configuration et bases des appareils"),
    ("services.card.device.desc", "Apprenez à configurer et à utiliser votre téléphone intelligent, votre tablette ou votre ordinateur en toute confiance."),
    ("services.card.video.title", "Appels vidéo et communication"),
    ("services.card.video.desc", "Maîtrisez Zoom, Skype, FaceTime et les autres plateformes d'appel vidéo pour garder le contact."),
    ("services.card.banking.title", "Banque et achats en ligne"),
    ("services.card.banking.desc", "Gérez vos finances et magasinez en ligne en toute sécurité grâce à de bonnes pratiques."),
    ("services.card.passwords.title", "Mots de passe et sécurité"),
    ("services.card.passwords.desc", "Créez des mots de passe solides, utilisez un gestionnaire de mots de passe et protégez vos comptes."),
    ("services.card.chatgpt.title", "ChatGPT et assistants IA"),
    ("services.card.chatgpt.desc", "Apprenez à utiliser des outils d'IA comme ChatGPT pour écrire, planifier et obtenir des réponses."),
    ("services.card.daily.title", "L'IA au quotidien"),
    ("services.card.daily.desc", "Utilisez l'IA pour rédiger des courriels, préparer vos listes d'épicerie et résumer de l'information."),
    ("services.card.understanding.title", "Comprendre l'IA en toute sécurité"),
    ("services.card.understanding.desc", "Comprenez le fonctionnement de l'IA et apprenez à reconnaître le contenu généré par l'IA."),
    ("services.card.scams.title", "Détection des arnaques et de la désinformation"),
    ("services.card.scams.desc", "Reconnaissez les arnaques, hypertrucages et fausses nouvelles générés par l'IA pour rester en sécurité."),
    ("services.approach.title", "Notre approche"),
    ("services.approach.personal.title", "Apprentissage personnalisé"),
    ("services.approach.personal.desc", "Nous adaptons notre enseignement à votre rythme et à vos préférences pour que vous vous sentiez à l'aise et en confiance."),
    ("services.approach.hands_on.title", "Pratique concrète"),
    ("services.approach.hands_on.desc", "Apprenez en pratiquant avec vos propres appareils, guidé dans un environnement sûr et bienveillant."),
    ("services.approach.support.title", "Soutien continu"),
    ("services.approach.support.desc", "Profitez de séances de suivi et d'un soutien par courriel pour consolider vos apprentissages."),
    ("services.approach.safety.title", "La sécurité d'abord"),
    ("services.approach.safety.desc", "Chaque leçon intègre les bonnes pratiques de sécurité pour vous protéger en ligne et préserver vos renseignements personnels."),
    ("services.approach.image_alt", "Séance d'apprentissage technologique personnalisée"),
    ("services.pricing.title", "Des tarifs simples et transparents"),
    ("services.pricing.subtitle", "Toutes les séances comprennent un enseignement personnalisé, de la pratique et du matériel de suivi."),
    ("services.pricing.free.title", "Consultation gratuite"),
    ("services.pricing.free.price", "0 $"),
    ("services.pricing.free.desc", "Séance de 30 minutes pour comprendre vos besoins et établir un plan d'apprentissage personnalisé."),
    ("services.pricing.free.item1", "Évaluation des besoins"),
    ("services.pricing.free.item2", "Plan d'apprentissage sur mesure"),
    ("services.pricing.free.item3", "Aucun engagement"),
    ("services.pricing.individual.title", "Séances individuelles"),
    ("services.pricing.individual.price", "60 $/h"),
    ("services.pricing.individual.desc", "Un enseignement individuel adapté à vos besoins et à vos objectifs."),
    ("services.pricing.individual.item1", "Enseignement personnalisé"),
    ("services.pricing.individual.item2", "Sur votre propre appareil"),
    ("services.pricing.individual.item3", "En ligne ou en personne"),
    ("services.pricing.group.title", "Ateliers de groupe"),
    ("services.pricing.group.price", "25 $/personne"),
    ("services.pricing.group.desc", "Séances en petits groupes dans les centres communautaires et bibliothèques de Montréal."),
    ("services.pricing.group.item1", "Petits groupes (4 à 8 personnes)"),
    ("services.pricing.group.item2", "Lieux communautaires"),
    ("services.pricing.group.item3", "Apprentissage convivial"),
    ("services.pricing.cta", "Réservez votre consultation gratuite"),
    // About
    ("about.title", "À propos de SeniorTech"),
    ("about.subtitle", "Une équipe montréalaise dédiée à l'autonomisation des aînés avec la technologie"),
    ("about.desc", "Nous sommes une équipe multidisciplinaire d'ingénieurs, de spécialistes en IA, de designers et de travailleurs communautaires. Nous combinons une connaissance technique approfondie avec un service centré sur l'humain pour aider les personnes âgées à naviguer dans le monde numérique de manière sûre et confiante."),
    ("about.mission.title", "Notre mission"),
    ("about.mission.body", "Fondés à Montréal, nous croyons que l'âge ne devrait jamais être un obstacle à la technologie. Notre approche patiente et personnalisée permet à chaque aîné de naviguer avec confiance dans le monde numérique et de tirer parti de l'IA au quotidien."),
    ("about.mission.image_alt", "Collaboration et mentorat au sein de l'équipe"),
    ("about.values.title", "Nos valeurs"),
    ("about.values.human.title", "Approche humaine"),
    ("about.values.human.desc", "Chaque échange repose sur le respect, la patience et la compréhension des besoins d'apprentissage de chacun."),
    ("about.values.empathy.title", "L'empathie d'abord"),
    ("about.values.empathy.desc", "Nous comprenons l'anxiété face à la technologie et créons des environnements d'apprentissage sûrs et bienveillants."),
    ("about.values.safety.title", "Sûreté et sécurité"),
    ("about.values.safety.desc", "La sécurité numérique et la protection de la vie privée font partie de chaque leçon et de chaque recommandation."),
    ("about.values.excellence.title", "Excellence"),
    ("about.values.excellence.desc", "Nous allions une solide expertise technique à des méthodes pédagogiques éprouvées."),
    ("about.team.title", "Rencontrez notre équipe"),
    ("about.team.sarah.role", "Fondatrice et spécialiste en IA"),
    ("about.team.sarah.bio", "Doctorat en intelligence artificielle, plus de 10 ans en développement d'IA éthique. Passionnée par une IA accessible et utile à tout âge."),
    ("about.team.marie.role", "Relations communautaires"),
    ("about.team.marie.bio", "Ancienne travailleuse sociale, 15 ans d'expérience auprès des aînés montréalais. Défenseure bilingue de l'inclusion numérique."),
    ("about.team.david.role", "Responsable de la formation technologique"),
    ("about.team.david.bio", "Ancien ingénieur logiciel devenu formateur. Spécialiste de la vulgarisation des concepts technologiques complexes."),
    ("about.partners.title", "Partenaires communautaires"),
    ("about.partners.intro", "Nous sommes fiers de collaborer avec les principaux organismes communautaires de Montréal pour offrir la formation technologique directement aux aînés partout en ville."),
    ("about.partners.atwater", "Ateliers hebdomadaires et séances individuelles"),
    ("about.partners.yellow_door", "Événements communautaires et apprentissage en groupe"),
    ("about.partners.ndg", "Ateliers réguliers de littératie en IA"),
    ("about.partners.westmount", "Séances mensuelles d'aide technologique"),
    ("about.partners.cta", "Contactez-nous"),
    // Workshops
    ("workshops.title", "Ateliers et événements communautaires"),
    ("workshops.subtitle", "Rejoignez nos sessions de groupe dans les bibliothèques et centres pour aînés à travers Montréal"),
    ("workshops.upcoming", "Ateliers à venir"),
    ("workshops.spots_left", "places restantes"),
    ("workshops.full", "Complet"),
    ("workshops.max", "Maximum"),
    ("workshops.participants", "participants"),
    ("workshops.register", "S'inscrire - 25 $"),
    ("workshops.register_full", "Atelier complet"),
    ("workshops.chatgpt.title", "Premiers pas avec ChatGPT"),
    ("workshops.chatgpt.desc", "Apprenez à utiliser ChatGPT en toute sécurité pour rédiger des courriels, trouver de l'information et vous simplifier la vie."),
    ("workshops.online_safety.title", "Sécurité en ligne pour les aînés"),
    ("workshops.online_safety.desc", "Conseils essentiels pour éviter les arnaques, protéger vos renseignements personnels et naviguer en sécurité."),
    ("workshops.smartphone.title", "Atelier : les bases du téléphone intelligent"),
    ("workshops.smartphone.desc", "Maîtrisez votre téléphone : appels, textos, photos, applications et réglages essentiels."),
    ("workshops.series.title", "Séries d'apprentissage en plusieurs séances"),
    ("workshops.series.subtitle", "Approfondissez vos connaissances grâce à nos séries conçues pour développer vos compétences progressivement."),
    ("workshops.series.sessions", "séances"),
    ("workshops.series.topics", "Sujets abordés :"),
    ("workshops.series.per_series", "/série"),
    ("workshops.series.learn_more", "En savoir plus"),
    ("workshops.series.ai.title", "L'IA au quotidien"),
    ("workshops.series.ai.desc", "Une introduction complète aux outils d'intelligence artificielle et à leur utilité dans la vie de tous les jours."),
    ("workshops.series.ai.topic1", "Comprendre l'IA : ce que c'est et comment ça fonctionne"),
    ("workshops.series.ai.topic2", "ChatGPT pour écrire et planifier"),
    ("workshops.series.ai.topic3", "Assistants vocaux (Siri, Alexa, Google)"),
    ("workshops.series.ai.topic4", "Détecter les arnaques et la désinformation liées à l'IA"),
    ("workshops.series.digital.title", "L'essentiel du numérique"),
    ("workshops.series.digital.desc", "Une formation complète couvrant toutes les compétences en ligne essentielles à la vie moderne."),
    ("workshops.series.digital.topic1", "Configuration des appareils et navigation de base"),
    ("workshops.series.digital.topic2", "Courriel et appels vidéo"),
    ("workshops.series.digital.topic3", "Banque et achats en ligne"),
    ("workshops.series.digital.topic4", "Gestion des mots de passe et sécurité"),
    ("workshops.series.digital.topic5", "Portails gouvernementaux et de santé"),
    ("workshops.series.digital.topic6", "Réseaux sociaux : bases et sécurité"),
    ("workshops.series.safety.title", "Rester en sécurité en ligne"),
    ("workshops.series.safety.desc", "Un accent sur la sécurité, la vie privée et la prévention des menaces et arnaques en ligne."),
    ("workshops.series.safety.topic1", "Reconnaître et éviter les arnaques"),
    ("workshops.series.safety.topic2", "Sécurité des mots de passe et authentification à deux facteurs"),
    ("workshops.series.safety.topic3", "Paramètres de confidentialité et protection des renseignements personnels"),
    ("workshops.expect.title", "À quoi s'attendre"),
    ("workshops.expect.small_groups.title", "Petits groupes"),
    ("workshops.expect.small_groups.desc", "De 8 à 10 participants au maximum pour une attention personnalisée"),
    ("workshops.expect.hands_on.title", "Apprentissage pratique"),
    ("workshops.expect.hands_on.desc", "Apportez votre appareil et pratiquez en temps réel"),
    ("workshops.expect.patient.title", "Enseignement patient"),
    ("workshops.expect.patient.desc", "Nous avançons à votre rythme et prenons le temps de répondre à vos questions"),
    ("workshops.expect.materials.title", "Documents à emporter"),
    ("workshops.expect.materials.desc", "Des guides écrits et des ressources pour continuer à apprendre"),
    ("workshops.expect.image_alt", "Des aînés qui apprennent ensemble lors d'un atelier"),
    ("workshops.ready.title", "Prêt à participer à un atelier?"),
    ("workshops.ready.body", "Inscrivez-vous aux prochains ateliers ou renseignez-vous sur les séances privées pour votre organisme."),
    ("workshops.ready.register", "S'inscrire à un atelier"),
    ("workshops.ready.private", "Demander une séance privée"),
    // Calendar
    ("month.1", "janvier"),
    ("month.2", "février"),
    ("month.3", "mars"),
    ("month.4", "avril"),
    ("month.5", "mai"),
    ("month.6", "juin"),
    ("month.7", "juillet"),
    ("month.8", "août"),
    ("month.9", "septembre"),
    ("month.10", "octobre"),
    ("month.11", "novembre"),
    ("month.12", "décembre"),
    // Contact
    ("contact.title", "Commencez dès aujourd'hui"),
    ("contact.subtitle", "Réservez votre consultation gratuite ou posez-nous vos questions"),
    ("contact.form.heading", "Réservez votre consultation gratuite"),
    ("contact.form.name", "Votre nom"),
    ("contact.form.name_ph", "Entrez votre nom complet"),
    ("contact.form.email", "Adresse email"),
    ("contact.form.email_ph", "votre.courriel@exemple.com"),
    ("contact.form.phone", "Numéro de téléphone"),
    ("contact.form.phone_ph", "(514) 123-4567"),
    ("contact.form.language", "Langue préférée"),
    ("contact.form.language.en", "Anglais"),
    ("contact.form.language.fr", "Français"),
    ("contact.form.needs", "Dans quoi aimeriez-vous de l'aide?"),
    ("contact.form.needs_ph", "Dites-nous ce dont vous avez besoin : configurer un appareil, découvrir l'IA, la sécurité en ligne, etc."),
    ("contact.form.submit", "Envoyer le message"),
    ("contact.form.sending", "Envoi en cours..."),
    ("contact.form.missing", "Veuillez remplir ce champ obligatoire :"),
    ("contact.info.title", "Joignez-nous"),
    ("contact.info.email", "Courriel"),
    ("contact.info.phone", "Téléphone"),
    ("contact.info.area", "Territoire desservi"),
    ("contact.info.area_value", "Montréal, Québec"),
    ("contact.info.area_detail", "En ligne et en personne"),
    ("contact.info.response", "Délai de réponse"),
    ("contact.info.response_value", "Sous 24 heures"),
    ("contact.info.response_days", "Du lundi au vendredi"),
    ("contact.map.title", "Nous desservons Montréal"),
    ("contact.map.soon", "Carte interactive à venir"),
    ("contact.map.boroughs", "Nous desservons tous les arrondissements de Montréal"),
    ("contact.map.online", "Séances en ligne offertes partout au Québec"),
    ("contact.success.title", "Message envoyé avec succès!"),
    ("contact.success.body", "Merci de nous avoir écrit. Nous vous répondrons d'ici 24 heures pour planifier votre consultation gratuite."),
    ("contact.success.home", "Retour à l'accueil"),
    // Footer
    ("footer.mission", "Accompagner les aînés avec la technologie et l'IA, pas à pas."),
    ("footer.location", "Montréal, Québec"),
    ("footer.quick_links", "Liens rapides"),
    ("footer.resources", "Ressources"),
    ("footer.privacy", "Politique de confidentialité"),
    ("footer.terms", "Conditions d'utilisation"),
    ("footer.newsletter", "Infolettre"),
    ("footer.follow", "Suivez-nous"),
    ("footer.follow.facebook", "Suivez-nous sur Facebook"),
    ("footer.follow.twitter", "Suivez-nous sur Twitter"),
    ("footer.follow.linkedin", "Suivez-nous sur LinkedIn"),
    ("footer.copyright", "© 2024 SeniorTech. Tous droits réservés."),
    ("footer.made_with", "Fait avec ❤️ pour les aînés de Montréal"),
];
