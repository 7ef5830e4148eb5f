//! Curated placeholder texts for well-known entries.
//!
//! A handful of famous low-numbered entries get real curated text so the
//! fallback path still produces something recognizable; each collection also
//! carries a default used for any other entry number. Everything else falls
//! through to the generic template in the parent module.

use crate::models::{Collection, Language};

/// One curated placeholder entry.
pub(crate) struct CuratedEntry {
    pub text: &'static str,
    pub translator: &'static str,
    pub title: &'static str,
}

const fn entry(
    text: &'static str,
    translator: &'static str,
    title: &'static str,
) -> CuratedEntry {
    CuratedEntry {
        text,
        translator,
        title,
    }
}

/// Curated text for a specific (collection, number, language) triple.
pub(crate) fn curated(
    collection: Collection,
    number: u32,
    language: Language,
) -> Option<CuratedEntry> {
    use Collection::*;
    use Language::*;

    let found = match (collection, number, language) {
        (SahihBukhari, 1, English) => entry(
            "The Messenger of Allah (\u{fdfa}) said: 'Actions are judged by intentions, so each man will have what he intended.'",
            "Dr. Muhsin Khan",
            "Chapter: How the Divine Revelation started",
        ),
        (SahihBukhari, 1, Arabic) => entry(
            "قَالَ رَسُولُ اللَّهِ صلى الله عليه وسلم إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ، وَإِنَّمَا لِكُلِّ امْرِئٍ مَا نَوَى",
            "محمد محسن خان",
            "كتاب بدء الوحي",
        ),
        (SahihBukhari, 1, Urdu) => entry(
            "آنحضرت صلی اللہ علیہ وسلم نے فرمایا: اعمال کا دارومدار نیتوں پر ہے، اور ہر شخص کو وہی ملے گا جس کی اس نے نیت کی ہے۔",
            "محمد محسن خان",
            "باب بدء الوحی",
        ),
        (SahihBukhari, 2, English) => entry(
            "Umar ibn Al-Khattab said: While we were sitting with the Messenger of Allah (\u{fdfa}) one day, a man with very white clothing and very black hair came to us. No mark of travel was visible on him, and none of us recognized him. He sat down facing the Prophet (\u{fdfa}) with his knees touching his, and his hands on his thighs.",
            "Dr. Muhsin Khan",
            "Chapter: How the Divine Revelation started",
        ),
        (SahihBukhari, 2, Arabic) => entry(
            "عَنْ عُمَرَ رَضِيَ اللَّهُ عَنْهُ أَيْضًا قَالَ بَيْنَمَا نَحْنُ جُلُوسٌ عِنْدَ رَسُولِ اللَّهِ صلى الله عليه وسلم ذَاتَ يَوْمٍ إِذْ طَلَعَ عَلَيْنَا رَجُلٌ شَدِيدُ بَيَاضِ الثِّيَابِ شَدِيدُ سَوَادِ الشَّعْرِ لَا يُرَى عَلَيْهِ أَثَرُ السَّفَرِ وَلَا يَعْرِفُهُ مِنَّا أَحَدٌ",
            "محمد محسن خان",
            "كتاب الإيمان",
        ),
        (SahihBukhari, 2, Urdu) => entry(
            "حضرت عمر رضی اللہ عنہ سے روایت ہے کہ ایک دن ہم رسول اللہ صلی اللہ علیہ وسلم کے پاس بیٹھے ہوئے تھے کہ اچانک ایک شخص ہمارے پاس آیا جس کے کپڑے نہایت سفید اور بال نہایت سیاہ تھے۔ اس پر سفر کے آثار نہیں تھے اور ہم میں سے کوئی اسے نہیں جانتا تھا۔",
            "محمد محسن خان",
            "باب الایمان",
        ),
        (SahihMuslim, 1, English) => entry(
            "It is narrated on the authority of Amirul Mu'minin, Abu Hafs 'Umar bin al-Khattab, who said: I heard the Messenger of Allah, say: 'Actions are according to intentions, and everyone will get what was intended.'",
            "Abdul Hamid Siddiqui",
            "Book of Faith",
        ),
        (SahihMuslim, 1, Arabic) => entry(
            "عَنْ أَمِيرِ الْمُؤْمِنِينَ أَبِي حَفْصٍ عُمَرَ بْنِ الْخَطَّابِ رَضِيَ اللهُ عَنْهُ قَالَ: سَمِعْت رَسُولَ اللَّهِ صلى الله عليه وسلم يَقُولُ: إنَّمَا الْأَعْمَالُ بِالنِّيَّاتِ، وَإِنَّمَا لِكُلِّ امْرِئٍ مَا نَوَى",
            "عبد الحميد صديقي",
            "كتاب الإيمان",
        ),
        (SahihMuslim, 1, Urdu) => entry(
            "امیر المومنین ابو حفص عمر بن خطاب رضی اللہ عنہ سے روایت ہے کہ میں نے رسول اللہ صلی اللہ علیہ وسلم کو فرماتے ہوئے سنا: اعمال کا دارومدار نیتوں پر ہے، اور ہر شخص کو وہی ملے گا جس کی اس نے نیت کی ہے۔",
            "عبد الحميد صديقي",
            "کتاب الایمان",
        ),
        (AlTirmidhi, 1, English) => entry(
            "Narrated Abu Hurairah: that the Messenger of Allah (\u{fdfa}) said: 'Prayer in congregation is twenty-five degrees more virtuous than prayer performed individually.'",
            "Abu Khaliyl",
            "Chapters on Salat",
        ),
        (AbuDawood, 1, English) => entry(
            "Narrated Abdullah ibn Umar: The Prophet (\u{fdfa}) said: The most excellent prayer in Allah's sight is the dawn prayer on Friday in congregation.",
            "Ahmad Hasan",
            "Book of Purification",
        ),
        _ => return None,
    };

    Some(found)
}

/// Default curated text for any other entry number in a collection.
pub(crate) fn collection_default(
    collection: Collection,
    language: Language,
) -> Option<CuratedEntry> {
    use Collection::*;
    use Language::*;

    let found = match (collection, language) {
        (SahihBukhari, English) => entry(
            "The Prophet (\u{fdfa}) said: 'Whoever believes in Allah and the Last Day should speak good or remain silent.'",
            "Dr. Muhsin Khan",
            "Book of Good Manners",
        ),
        (SahihBukhari, Arabic) => entry(
            "قال النبي صلى الله عليه وسلم: 'من كان يؤمن بالله واليوم الآخر فليقل خيرا أو ليصمت'",
            "محمد محسن خان",
            "كتاب الأدب",
        ),
        (SahihBukhari, Urdu) => entry(
            "آپ صلی اللہ علیہ وسلم نے فرمایا: 'جو شخص اللہ اور آخرت کے دن پر ایمان رکھتا ہے، اسے اچھی بات کہنی چاہیے یا خاموش رہنا چاہیے۔'",
            "محمد محسن خان",
            "باب اخلاق",
        ),
        (SahihMuslim, English) => entry(
            "The Prophet (\u{fdfa}) said: 'Religion is sincerity.' We said, 'To whom?' He said, 'To Allah, His Book, His Messenger, the leaders of the Muslims, and their common folk.'",
            "Abdul Hamid Siddiqui",
            "Book of Faith",
        ),
        (AlTirmidhi, English) => entry(
            "The Prophet (\u{fdfa}) said: 'The most beloved of deeds to Allah are the most consistent ones, even if they are small.'",
            "Abu Khaliyl",
            "Chapters on Virtues",
        ),
        (AbuDawood, English) => entry(
            "The Prophet (\u{fdfa}) said: 'Whoever takes a path in search of knowledge, Allah will make easy for him the path to Paradise.'",
            "Ahmad Hasan",
            "Book of Knowledge",
        ),
        (IbnEMajah, English) => entry(
            "The Prophet (\u{fdfa}) said: 'The best of you are those who are best to their families, and I am the best of you to my family.'",
            "Nasiruddin al-Khattab",
            "Book of Marriage",
        ),
        (SunanNasai, English) => entry(
            "The Prophet (\u{fdfa}) said: 'The example of a good companion and a bad companion is like that of the seller of musk and the one who blows the bellows.'",
            "Nasiruddin al-Khattab",
            "Book of Companionship",
        ),
        (Mishkat, English) => entry(
            "The Prophet (\u{fdfa}) said: 'Verily, Allah does not look at your appearance or wealth, but rather He looks at your hearts and actions.'",
            "James Robson",
            "Book of Heart Softeners",
        ),
        _ => return None,
    };

    Some(found)
}
