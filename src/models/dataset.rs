use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::activities::{Activity, ActivityStatus};
use super::gallery::{GalleryItem, MediaType};
use super::members::{Member, Performance};
use super::messages::Message;
use super::notices::Notice;
use super::settings::SamitySettings;
use super::transactions::{Transaction, TransactionStatus, TransactionType};

/// The whole persisted state: settings plus every collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub settings: SamitySettings,
    #[serde(default)]
    pub notices: Vec<Notice>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Dataset {
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Data the society starts with before anything has been saved.
    pub fn seed() -> Self {
        Dataset {
            settings: SamitySettings {
                name: "بذر الغد".into(),
                logo: "https://picsum.photos/200/200?random=logo".into(),
                slogan: "Save Together, Grow Together".into(),
                intro: "এটি একটি অলাভজনক সমবায় সমিতি। আমাদের মূল লক্ষ্য হল ক্ষুদ্র সঞ্চয়ের মাধ্যমে সদস্যদের আত্মনির্ভরশীল করে তোলা এবং এই অলাভজনক সমীতিকে লাভজনক সমীতিতে কনভার্ট করা।".into(),
                about_title: "আমাদের সম্পর্কে".into(),
                about_content: "২০২৬ সালে শুরু আমাদের যাত্রা। বিশ্বস্ততা ও স্বচ্ছতাই আমাদের শক্তি। ইনশা আল্লাহ, একদিন আমরা সফলতার শিখরে পৌঁছাবো।".into(),
                membership_rules: "১. যেকোনো প্রাপ্তবয়স্ক বাংলাদেশী নাগরিক সদস্য হতে পারবেন।\n২. নির্ধারিত টাকা সময়েল মধ্যে পরিশোধ করতে হবে।\n৩. প্রত্যেক মিটিংয়ে উপস্থিতি বাধ্যতামূলক।".into(),
                monthly_savings_amount: Decimal::from(1000),
                contact_address: "বাড়ি নং ...., ঢাকা-বাংলাদেশ".into(),
                contact_mobile: "01324532410".into(),
                contact_email: "bajrulgad@gmail.com".into(),
                whatsapp_link: "https://wa.me/8801700000000".into(),
                facebook_link: "https://facebook.com/samity".into(),
                google_map_embed: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d116833.83187883446!2d90.33728813280826!3d23.78106723972236!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3755b8b087026b81%3A0x8fa563bbdd5904c2!2sDhaka!5e0!3m2!1sen!2sbd!4v1715421234567!5m2!1sen!2sbd".into(),
                admin_password: Some("admin123".into()),
            },
            notices: vec![
                Notice {
                    id: "1".into(),
                    title: "বার্ষিক সাধারণ সভা ২০২৪".into(),
                    content: "আগামী ২০শে অক্টোবর আমাদের বার্ষিক সভা অনুষ্ঠিত হবে।".into(),
                    date: "2024-10-01".into(),
                    download_url: None,
                },
                Notice {
                    id: "2".into(),
                    title: "নতুন সঞ্চয় স্কিম চালু".into(),
                    content: "সদস্যদের সুবিধার জন্য ১০০০ টাকার মাসিক স্কিম চালু হয়েছে।".into(),
                    date: "2024-09-15".into(),
                    download_url: None,
                },
            ],
            activities: vec![
                Activity {
                    id: "1".into(),
                    title: "পোল্ট্রি খামার প্রকল্প".into(),
                    description: "সদস্যদের লভ্যাংশ বৃদ্ধির জন্য নিজস্ব পোল্ট্রি খামার স্থাপনের কাজ চলছে।".into(),
                    status: ActivityStatus::Ongoing,
                },
                Activity {
                    id: "2".into(),
                    title: "বৃক্ষরোপণ কর্মসূচি".into(),
                    description: "গত বর্ষায় ৫০০০ চারা বিতরণ করা হয়েছে।".into(),
                    status: ActivityStatus::Completed,
                },
            ],
            gallery: vec![
                GalleryItem {
                    id: "1".into(),
                    title: "মিটিংয়ের ছবি".into(),
                    description: "২০২৪ সালের সেপ্টেম্বর মাসের জরুরি মিটিং।".into(),
                    image_url: "https://picsum.photos/400/300?random=1".into(),
                    kind: MediaType::Image,
                },
                GalleryItem {
                    id: "2".into(),
                    title: "কার্যক্রমের ছবি".into(),
                    description: "আমাদের নতুন প্রকল্প পরিদর্শনে সদস্যরা।".into(),
                    image_url: "https://picsum.photos/400/300?random=2".into(),
                    kind: MediaType::Image,
                },
            ],
            members: vec![
                Member {
                    id: "1001".into(),
                    name: "আব্দুল করিম".into(),
                    mobile: "01711111111".into(),
                    password: Some("111".into()),
                    join_date: "2020-01-01".into(),
                    total_savings: Decimal::from(50000),
                    image_url: Some("https://i.pravatar.cc/150?u=1001".into()),
                    performance: Performance::Green,
                },
                Member {
                    id: "1002".into(),
                    name: "রহিমা বেগম".into(),
                    mobile: "01722222222".into(),
                    password: Some("222".into()),
                    join_date: "2021-05-10".into(),
                    total_savings: Decimal::from(35000),
                    image_url: Some("https://i.pravatar.cc/150?u=1002".into()),
                    performance: Performance::Yellow,
                },
            ],
            transactions: vec![
                paid_savings("t1", "1001", "2024-10-01"),
                paid_savings("t2", "1001", "2024-09-01"),
                paid_savings("t3", "1002", "2024-10-01"),
            ],
            messages: Vec::new(),
        }
    }
}

fn paid_savings(id: &str, member_id: &str, date: &str) -> Transaction {
    Transaction {
        id: id.into(),
        member_id: member_id.into(),
        amount: Decimal::from(500),
        date: date.into(),
        kind: TransactionType::Savings,
        status: TransactionStatus::Paid,
    }
}
