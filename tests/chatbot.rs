use rand::rngs::SmallRng;
use rand::SeedableRng;
use saludmente::chat::{classify, Chatbot, Conversation, Intent, Sender};
use std::time::{Duration, Instant};

#[test]
fn test_classification_follows_intent_order() {
    // Greeting is checked before Anxiety
    assert_eq!(classify("Hola, tengo ansiedad"), Some(Intent::Greeting));
    assert_eq!(classify("me siento muy ANSIOSA"), Some(Intent::Anxiety));
    assert_eq!(classify("quiero aprender a respirar"), Some(Intent::Breathing));
    assert_eq!(classify("estoy estresado"), Some(Intent::Stress));
    assert_eq!(classify("¿debería ir a terapia?"), Some(Intent::Professional));
    assert_eq!(classify("necesito apoyo"), Some(Intent::Support));
    assert_eq!(classify("alguna técnica útil"), Some(Intent::Techniques));
    assert_eq!(classify("el cielo es azul"), None);
}

#[test]
fn test_replies_stay_within_their_bucket() {
    let mut bot = Chatbot::with_rng(SmallRng::seed_from_u64(42));
    for _ in 0..50 {
        let reply = bot.respond("estoy triste");
        assert!(Intent::Sadness.responses().contains(&reply));
    }
}

#[test]
fn test_unmatched_messages_use_fallback_buckets() {
    let mut bot = Chatbot::with_rng(SmallRng::seed_from_u64(3));
    for _ in 0..100 {
        let reply = bot.respond("el cielo es azul");
        assert!(
            Intent::Encouragement.responses().contains(&reply)
                || Intent::Default.responses().contains(&reply)
        );
    }
}

#[test]
fn test_conversation_flow() {
    let mut conversation =
        Conversation::with_bot(Chatbot::with_rng(SmallRng::seed_from_u64(9)));
    let start = Instant::now();

    assert!(conversation.send("necesito ayuda", start));
    assert!(conversation.is_typing());
    assert!(!conversation.poll(start + Duration::from_millis(500)));
    assert!(conversation.poll(start + Duration::from_millis(2000)));

    let senders: Vec<Sender> = conversation.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
}
