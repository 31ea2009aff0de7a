//! Static clinical reference data.
//!
//! Loaded once per process and never mutated. Category order here is the
//! canonical display order for every consumer.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::catalogue::entities::{
    Bilingual, DietRule, DiseaseInfo, HealthCategory, HealthCondition, HealthGroup,
};

fn condition(id: &str, name: &str) -> HealthCondition {
    HealthCondition {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn group(id: &str, name: &str, conditions: Vec<HealthCondition>) -> HealthGroup {
    HealthGroup {
        id: id.to_string(),
        name: name.to_string(),
        conditions,
    }
}

fn category(id: &str, name: &str, groups: Vec<HealthGroup>) -> HealthCategory {
    HealthCategory {
        id: id.to_string(),
        name: name.to_string(),
        groups,
    }
}

fn rule(
    id: &str,
    name: &str,
    avoid: &[&str],
    limit: &[&str],
    recommend: &[&str],
    general_advice: &str,
) -> (String, DietRule) {
    (
        id.to_string(),
        DietRule {
            id: id.to_string(),
            name: name.to_string(),
            avoid: avoid.iter().map(|s| s.to_string()).collect(),
            limit: limit.iter().map(|s| s.to_string()).collect(),
            recommend: recommend.iter().map(|s| s.to_string()).collect(),
            general_advice: general_advice.to_string(),
        },
    )
}

fn bilingual(en: &str, zh: &str) -> Bilingual {
    Bilingual {
        en: en.to_string(),
        zh: zh.to_string(),
    }
}

fn info(
    id: &str,
    overview: (&str, &str),
    severity: (&str, &str),
    dietary_habits: (&str, &str),
    advice: (&str, &str),
) -> (String, DiseaseInfo) {
    (
        id.to_string(),
        DiseaseInfo {
            id: id.to_string(),
            overview: bilingual(overview.0, overview.1),
            severity: bilingual(severity.0, severity.1),
            dietary_habits: bilingual(dietary_habits.0, dietary_habits.1),
            advice: bilingual(advice.0, advice.1),
        },
    )
}

pub static HEALTH_CATEGORIES: LazyLock<Vec<HealthCategory>> = LazyLock::new(|| {
    vec![
        category(
            "A",
            "A. Metabolic (代谢类)",
            vec![
                group(
                    "A1",
                    "A1 Diabetes (糖尿病)",
                    vec![
                        condition("diabetes_t1", "Type 1 Diabetes (1型糖尿病)"),
                        condition("diabetes_t2", "Type 2 Diabetes (2型糖尿病)"),
                        condition("diabetes_gestational", "Gestational Diabetes (妊娠糖尿病)"),
                        condition("prediabetes", "Pre-diabetes/IGT (糖耐量受损)"),
                    ],
                ),
                group(
                    "A2",
                    "A2 Metabolic Syndrome (代谢综合症)",
                    vec![condition("metabolic_syndrome", "Metabolic Syndrome")],
                ),
                group(
                    "A3",
                    "A3 Fatty Liver (脂肪肝)",
                    vec![
                        condition("fatty_liver_nafld", "NAFLD (非酒精性脂肪肝)"),
                        condition("fatty_liver_afld", "AFLD (酒精性脂肪肝)"),
                    ],
                ),
            ],
        ),
        category(
            "B",
            "B. Cardiovascular (心血管类)",
            vec![
                group(
                    "B1",
                    "B1 Hypertension (高血压)",
                    vec![condition("hypertension", "Hypertension (高血压)")],
                ),
                group(
                    "B2",
                    "B2 Hyperlipidemia (高血脂)",
                    vec![
                        condition("high_ldl", "High LDL Cholesterol (高胆固醇)"),
                        condition("high_triglycerides", "High Triglycerides (高甘油三酯)"),
                    ],
                ),
                group(
                    "B3",
                    "B3 Heart Disease (心脏病)",
                    vec![
                        condition("cad", "Coronary Artery Disease (冠心病)"),
                        condition("heart_failure", "Heart Failure (心力衰竭)"),
                    ],
                ),
            ],
        ),
        category(
            "C",
            "C. Kidney (肾脏类)",
            vec![
                group(
                    "C1",
                    "C1 Chronic Kidney Disease (CKD)",
                    vec![
                        condition("ckd_1_2", "CKD Stage 1-2 (早期肾病)"),
                        condition("ckd_3_5", "CKD Stage 3-5 (中晚期肾病)"),
                    ],
                ),
                group(
                    "C3",
                    "C3 Electrolyte Imbalance",
                    vec![
                        condition("hyperkalemia", "Hyperkalemia (高钾血症)"),
                        condition("hyperphosphatemia", "Hyperphosphatemia (高磷血症)"),
                    ],
                ),
            ],
        ),
        category(
            "D",
            "D. Uric Acid / Gout (尿酸痛风类)",
            vec![
                group("D1", "D1 Gout (痛风)", vec![condition("gout", "Gout (痛风)")]),
                group(
                    "D2",
                    "D2 Hyperuricemia (高尿酸)",
                    vec![condition(
                        "hyperuricemia",
                        "Asymptomatic Hyperuricemia (无症状高尿酸)",
                    )],
                ),
            ],
        ),
        category(
            "E",
            "E. Liver/Gallbladder/Pancreas (肝胆胰)",
            vec![
                group(
                    "E2",
                    "E2 Gallbladder (胆囊疾病)",
                    vec![condition("gallstones", "Gallstones/Cholecystitis (胆结石/胆囊炎)")],
                ),
                group(
                    "E3",
                    "E3 Pancreatitis (胰腺炎)",
                    vec![condition(
                        "pancreatitis_chronic",
                        "Chronic Pancreatitis (慢性胰腺炎)",
                    )],
                ),
            ],
        ),
        category(
            "F",
            "F. Gastrointestinal (胃肠道)",
            vec![
                group(
                    "F1",
                    "F1 Stomach (胃部)",
                    vec![
                        condition("gerd", "GERD (胃食管反流)"),
                        condition("gastritis", "Gastritis (胃炎)"),
                    ],
                ),
                group(
                    "F2",
                    "F2 Bowel (肠道)",
                    vec![
                        condition("ibs", "IBS (肠易激综合症)"),
                        condition("celiac", "Celiac Disease (乳糜泻)"),
                    ],
                ),
            ],
        ),
        category(
            "G",
            "G. Allergies/Intolerances (过敏不耐受)",
            vec![
                group(
                    "G1",
                    "G1 Food Allergies",
                    vec![
                        condition("allergy_nut", "Nut Allergy (坚果过敏)"),
                        condition("allergy_seafood", "Seafood Allergy (海鲜过敏)"),
                    ],
                ),
                group(
                    "G2",
                    "G2 Intolerances",
                    vec![condition("lactose_intolerance", "Lactose Intolerance (乳糖不耐受)")],
                ),
            ],
        ),
        category(
            "H",
            "H. Special Groups (特殊人群)",
            vec![
                group(
                    "H1",
                    "H1 Pregnancy",
                    vec![condition("pregnancy", "Pregnancy (孕妇)")],
                ),
                group(
                    "H2",
                    "H2 Children",
                    vec![condition("toddler", "Toddler 1-3y (幼儿)")],
                ),
            ],
        ),
        category(
            "I",
            "I. Neurological (神经系统)",
            vec![group(
                "I1",
                "I1 Cognitive Health",
                vec![condition(
                    "alzheimers",
                    "Alzheimer's Prevention/Care (阿尔茨海默病)",
                )],
            )],
        ),
    ]
});

pub static DIET_RULES: LazyLock<HashMap<String, DietRule>> = LazyLock::new(|| {
    HashMap::from([
        // A. Metabolic
        rule(
            "diabetes_t1",
            "Type 1 Diabetes (1型糖尿病)",
            &["Sugary soda (汽水)", "Candy (糖果)", "Juice (果汁)"],
            &["Refined carbs (精制碳水)", "Dried fruit (干果)"],
            &["Fiber-rich veggies (高纤蔬菜)", "Lean protein (瘦肉)", "Whole grains (全谷物)"],
            "Count carbohydrates precisely to match insulin dosage. (精确计算碳水，匹配胰岛素用量)",
        ),
        rule(
            "diabetes_t2",
            "Type 2 Diabetes (2型糖尿病)",
            &["White bread/rice (白米白面)", "Sugary drinks (含糖饮料)", "Trans fats (反式脂肪)"],
            &["Tropical fruits (热带水果)", "Red meat (红肉)", "Alcohol (酒精)"],
            &["Leafy greens (叶菜)", "Legumes (豆类)", "Nuts (坚果)", "Fatty fish (深海鱼)"],
            "Focus on low Glycemic Index (GI) foods and portion control. (关注低GI食物，控制分量)",
        ),
        rule(
            "diabetes_gestational",
            "Gestational Diabetes (妊娠糖尿病)",
            &["Sweets (甜食)", "Baked goods (烘焙)", "Soda (苏打水)"],
            &["Fruit-morning (晨间水果)", "Starchy veg (淀粉类蔬菜)"],
            &["Protein with every meal (每餐蛋白)", "Complex carbs (复合碳水)", "Green veg (绿叶菜)"],
            "Distribute carbs evenly throughout the day to avoid spikes. (全天均匀分配碳水，避免血糖峰值)",
        ),
        rule(
            "prediabetes",
            "Pre-diabetes (糖耐量受损)",
            &["Sugary beverages (含糖饮料)", "Processed snacks (加工零食)"],
            &["Simple carbs (简单碳水)", "Alcohol (酒)"],
            &["Whole foods (原型食物)", "Fiber (纤维)", "Water (水)"],
            "Reduce sugar and refined carbs to prevent progression to Type 2. (减少糖和精制碳水，预防发展为2型糖尿病)",
        ),
        rule(
            "metabolic_syndrome",
            "Metabolic Syndrome (代谢综合症)",
            &["HFCS (果葡糖浆)", "Trans fats (反式脂肪)", "Deep fried (油炸)"],
            &["Sodium (钠)", "Saturated fat (饱和脂肪)"],
            &["Mediterranean diet (地中海饮食)", "Olive oil (橄榄油)", "Avocado (牛油果)"],
            "Focus on weight management and reducing insulin resistance. (控制体重，改善胰岛素抵抗)",
        ),
        rule(
            "fatty_liver_nafld",
            "NAFLD (非酒精性脂肪肝)",
            &["Added sugars (添加糖)", "Fried foods (油炸)", "Refined grains (精粮)"],
            &["Red meat (红肉)", "Saturated fats (饱和脂肪)"],
            &["Black Coffee (黑咖啡)", "Cruciferous veg (十字花科)", "Omega-3"],
            "Weight loss and avoiding fructose/sugar are critical. (减重和避免果糖/蔗糖至关重要)",
        ),
        rule(
            "fatty_liver_afld",
            "AFLD (酒精性脂肪肝)",
            &["ALCOHOL (Strictly/严格禁酒)", "Greasy foods (油腻食物)"],
            &["Sugar (糖)", "Salt (盐)"],
            &["Leafy greens (叶菜)", "Complex carbs (复合碳水)"],
            "Complete abstinence from alcohol is required for recovery. (必须完全戒酒以促进康复)",
        ),
        // B. Cardiovascular
        rule(
            "hypertension",
            "Hypertension (高血压)",
            &[
                "Pickles (腌制食品)",
                "Canned soup (罐头汤)",
                "Deli meats (加工肉)",
                "Salty snacks (咸味零食)",
            ],
            &["Caffeine (咖啡因)", "Alcohol (酒)", "Cheese (奶酪)"],
            &["Bananas (香蕉)", "Spinach (菠菜)", "Beets (甜菜根)", "Berries (浆果)"],
            "DASH Diet: Low sodium (<2300mg/day), high potassium. (DASH饮食：低钠，高钾)",
        ),
        rule(
            "high_ldl",
            "High LDL Cholesterol (高胆固醇)",
            &["Trans fats (反式脂肪)", "Processed meats (加工肉)", "Fast food (快餐)"],
            &["Butter (黄油)", "Red meat (红肉)", "Full-fat dairy (全脂奶)"],
            &["Oatmeal (燕麦)", "Nuts (坚果)", "Olive oil (橄榄油)"],
            "Replace saturated fats with unsaturated fats. Increase soluble fiber. (用不饱和脂肪替代饱和脂肪，增加可溶性纤维)",
        ),
        rule(
            "high_triglycerides",
            "High Triglycerides (高甘油三酯)",
            &["Sugary drinks (甜饮料)", "Alcohol (酒)", "Refined flour (精面)"],
            &["Fruit juice (果汁)", "Honey/Syrup (蜂蜜/糖浆)"],
            &["Salmon (三文鱼)", "Whole grains (全谷物)"],
            "Cut sugar and alcohol drastically. (大幅减少糖和酒精摄入)",
        ),
        rule(
            "cad",
            "Coronary Artery Disease (冠心病)",
            &["Trans fats (反式脂肪)", "Deep fried (油炸)", "Processed meats (加工肉)"],
            &["Red meat (红肉)", "Egg yolks (蛋黄)", "Salt (盐)"],
            &["Fruits/Veg (蔬果)", "Whole grains (全谷)", "Plant protein (植物蛋白)"],
            "Heart-healthy, low-inflammatory diet. (心脏健康，抗炎饮食)",
        ),
        rule(
            "heart_failure",
            "Heart Failure (心力衰竭)",
            &["Salt (盐)", "MSG (味精)", "Canned goods (罐头)"],
            &["Fluid intake (液体摄入)", "Alcohol (酒)"],
            &["Fresh herbs (香草)", "Lean meats (瘦肉)"],
            "Strict sodium control (<2000mg) and fluid restriction are vital. (严格控制钠<2000mg和液体摄入至关重要)",
        ),
        // C. Kidney
        rule(
            "ckd_1_2",
            "CKD Stage 1-2 (早期肾病)",
            &["High sodium processed foods (高钠加工食品)"],
            &["Animal protein (动物蛋白)", "Salt (盐)"],
            &["Fresh produce (新鲜蔬果)", "Plant proteins (植物蛋白)"],
            "Control BP and blood sugar. Moderate protein. (控制血压血糖，适量蛋白)",
        ),
        rule(
            "ckd_3_5",
            "CKD Stage 3-5 (中晚期肾病)",
            &["Star fruit (杨桃)", "Canned foods (罐头)", "Dark colas (深色可乐)"],
            &["Protein (蛋白)", "Potassium (钾)", "Phosphorus (磷)"],
            &["Low-K veg (低钾蔬菜)", "Egg whites (蛋白)", "White rice (白米)"],
            "Strict control of electrolytes (K, P) and protein load. (严格控制电解质和蛋白负荷)",
        ),
        rule(
            "hyperkalemia",
            "Hyperkalemia (高钾血症)",
            &[
                "Bananas (香蕉)",
                "Potatoes-skin (带皮土豆)",
                "Tomatoes (番茄)",
                "Avocado (牛油果)",
            ],
            &["Oranges (橙子)", "Spinach-raw (生菠菜)", "Dairy (奶)"],
            &["Apples (苹果)", "Berries (浆果)", "Cabbage (卷心菜)", "Rice (米饭)"],
            "Avoid high-potassium fruits/veg or leach them. (避免高钾蔬果或水煮去钾)",
        ),
        // D. Gout
        rule(
            "gout",
            "Gout (痛风)",
            &["Organ meats (内脏)", "Shellfish (贝类)", "Beer (啤酒)", "HFCS soda (果葡糖浆)"],
            &["Red meat (红肉)", "Oatmeal (燕麦)", "Spinach (菠菜)", "Asparagus (芦笋)"],
            &["Cherries (樱桃)", "Vitamin C (维C)", "Low-fat dairy (低脂奶)", "Coffee (咖啡)"],
            "Low-purine diet. Stay hydrated. (低嘌呤饮食，多喝水)",
        ),
        // F. GI
        rule(
            "gerd",
            "GERD (胃食管反流)",
            &["Fried food (油炸)", "Spicy (辛辣)", "Citrus (柑橘)", "Mint (薄荷)"],
            &["Coffee (咖啡)", "Chocolate (巧克力)", "Carbonated (碳酸)"],
            &["Oatmeal (燕麦)", "Ginger (姜)", "Melon (瓜类)", "Lean poultry (禽肉)"],
            "Avoid triggers. Small meals. Do not lie down after eating. (避免诱因，少食多餐，饭后勿躺)",
        ),
        rule(
            "ibs",
            "IBS (肠易激综合症)",
            &["High FODMAP (高发酵碳水)", "Artificial sweeteners (代糖)"],
            &["Beans (豆类)", "Cruciferous (十字花科)", "Lactose (乳糖)"],
            &["Low FODMAP", "Soluble fiber (可溶纤维)", "Peppermint (薄荷)"],
            "Identify triggers via elimination diet. (通过排除法寻找诱因)",
        ),
        rule(
            "celiac",
            "Celiac Disease (乳糜泻)",
            &["WHEAT (小麦)", "BARLEY (大麦)", "RYE (黑麦)", "Malt (麦芽)"],
            &["Cross-contaminated oats (污染燕麦)", "Soy sauce (酱油)"],
            &["Rice (米)", "Corn (玉米)", "Quinoa (藜麦)", "Potatoes (土豆)"],
            "Strict Gluten-Free diet is mandatory. (必须严格无麸质饮食)",
        ),
        rule(
            "lactose_intolerance",
            "Lactose Intolerance (乳糖不耐受)",
            &["Milk (牛奶)", "Ice cream (冰淇淋)", "Soft cheese (软芝士)"],
            &["Yogurt (酸奶)", "Butter (黄油)", "Hard cheese (硬芝士)"],
            &["Lactose-free milk (无乳糖奶)", "Soy milk (豆奶)"],
            "Avoid lactose or use lactase enzyme. (避免乳糖或使用乳糖酶)",
        ),
        // H. Special
        rule(
            "pregnancy",
            "Pregnancy (孕妇)",
            &[
                "Raw fish (生鱼)",
                "Unpasteurized dairy (未杀菌奶)",
                "High-mercury fish (高汞鱼)",
                "Alcohol (酒)",
            ],
            &["Caffeine (咖啡因)", "Processed junk (垃圾食品)"],
            &["Folic acid (叶酸)", "Iron (铁)", "Calcium (钙)", "Protein (蛋白)"],
            "Focus on nutrient density. Food safety is paramount. (注重营养密度，食品安全第一)",
        ),
        // I. Neurological
        rule(
            "alzheimers",
            "Alzheimer's Disease (阿尔茨海默病)",
            &["Processed meats (加工肉)", "Added sugar (添加糖)", "Refined carbs (精制碳水)"],
            &[
                "Red meat (红肉)",
                "Butter/Margarine (黄油/人造黄油)",
                "Cheese (奶酪)",
                "Fried food (油炸)",
            ],
            &[
                "Leafy greens (叶菜)",
                "Berries (浆果)",
                "Nuts (坚果)",
                "Fatty fish (深海鱼)",
                "Olive oil (橄榄油)",
            ],
            "Follow the MIND Diet: A hybrid of Mediterranean and DASH diets proven to support brain health. (遵循MIND饮食：结合地中海和DASH饮食，证实有助于脑部健康)",
        ),
    ])
});

pub static DISEASE_INFO: LazyLock<HashMap<String, DiseaseInfo>> = LazyLock::new(|| {
    HashMap::from([
        // A. Metabolic
        info(
            "diabetes_t1",
            (
                "Type 1 Diabetes is an autoimmune condition where the pancreas produces little or no insulin. It is not caused by diet or lifestyle.",
                "1型糖尿病是一种自身免疫性疾病，胰腺产生很少或不产生胰岛素。它不是由饮食或生活方式引起的。",
            ),
            (
                "Requires lifelong insulin therapy. Without insulin, life-threatening ketoacidosis (DKA) can occur quickly.",
                "需要终身胰岛素治疗。如果没有胰岛素，可能很快发生危及生命的酮症酸中毒（DKA）。",
            ),
            (
                "Carbohydrate counting is essential to match insulin doses. Consistency in meal timing helps prevent hypoglycemia.",
                "碳水化合物计数对于匹配胰岛素剂量至关重要。规律的进餐时间有助于预防低血糖。",
            ),
            (
                "Monitor blood sugar frequently. Carry fast-acting glucose for lows. Balance insulin with food and activity.",
                "频繁监测血糖。随身携带速效葡萄糖以防低血糖。平衡胰岛素、食物和运动。",
            ),
        ),
        info(
            "diabetes_t2",
            (
                "Type 2 Diabetes develops slowly over years. It begins with insulin resistance where cells fail to respond to insulin effectively. Eventually, the pancreas cannot keep up, leading to high blood sugar. Risk factors include obesity, age, and inactivity.",
                "2型糖尿病通常历经数年缓慢发展。始于胰岛素抵抗，即细胞无法有效响应胰岛素。最终胰腺无法分泌足够胰岛素，导致高血糖。风险因素包括肥胖、年龄和缺乏运动。",
            ),
            (
                "Uncontrolled levels lead to serious complications: nerve damage (neuropathy), kidney failure (nephropathy), vision loss (retinopathy), and increased risk of heart attack or stroke.",
                "血糖控制不佳会导致严重并发症：神经损伤（神经病变）、肾衰竭（肾病）、视力丧失（视网膜病变）以及心脏病发作或中风风险增加。",
            ),
            (
                "Consistently monitor carbohydrate intake. Focus on low Glycemic Index (GI) foods. Avoid skipping meals to prevent blood sugar fluctuations. Practice strict portion control.",
                "持续监测碳水化合物摄入量。专注于低升糖指数（GI）食物。避免不吃正餐以防血糖波动。实行严格的分量控制。",
            ),
            (
                "Aim for 150 minutes of moderate activity per week. Monitor blood sugar regularly. Check feet daily for cuts or sores. Maintain a healthy weight.",
                "每周进行至少150分钟的中等强度运动。定期监测血糖。每天检查足部是否有伤口。保持健康体重。",
            ),
        ),
        info(
            "diabetes_gestational",
            (
                "Gestational diabetes occurs during pregnancy when hormonal changes cause insulin resistance. It usually resolves after birth but increases Type 2 risk later.",
                "妊娠糖尿病发生在怀孕期间，激素变化导致胰岛素抵抗。通常在分娩后消失，但会增加日后患2型糖尿病的风险。",
            ),
            (
                "Can cause high birth weight (macrosomia), preterm birth, and respiratory issues for the baby, plus preeclampsia for the mother.",
                "可能导致巨大儿、早产和婴儿呼吸问题，以及母亲的先兆子痫。",
            ),
            (
                "Distribute carbohydrates evenly across 3 meals and 2-3 snacks to avoid spikes. Pair carbs with protein/fat.",
                "将碳水化合物均匀分配到3顿正餐和2-3顿加餐中，以避免血糖峰值。将碳水与蛋白质/脂肪搭配食用。",
            ),
            (
                "Monitor blood sugar 4 times daily (fasting and post-meals). Moderate exercise (walking) after meals helps lower blood sugar.",
                "每天监测4次血糖（空腹和饭后）。饭后适度运动（散步）有助于降低血糖。",
            ),
        ),
        info(
            "prediabetes",
            (
                "Blood sugar levels are higher than normal but not yet high enough for a diabetes diagnosis. It is a critical warning sign.",
                "血糖水平高于正常值，但尚未达到糖尿病的诊断标准。这是一个关键的警示信号。",
            ),
            (
                "Without intervention, many people with prediabetes develop Type 2 diabetes within 5 years. It also increases heart disease risk.",
                "如果不加干预，许多前驱糖尿病患者会在5年内发展为2型糖尿病。它也会增加心脏病风险。",
            ),
            (
                "Focus on weight loss and reducing simple sugars. Swap white rice/bread for whole grains. Fill half your plate with vegetables.",
                "专注于减肥和减少单糖摄入。将白米/白面包换成全谷物。盘子的一半应为蔬菜。",
            ),
            (
                "Losing just 5-7% of body weight can prevent or delay diabetes. Exercise 30 minutes a day, 5 days a week.",
                "只需减轻5-7%的体重即可预防或延缓糖尿病。每周5天，每天运动30分钟。",
            ),
        ),
        info(
            "metabolic_syndrome",
            (
                "A cluster of conditions occurring together: high blood pressure, high blood sugar, excess body fat around the waist, and abnormal cholesterol levels.",
                "一组同时发生的病症：高血压、高血糖、腰部脂肪堆积和胆固醇水平异常。",
            ),
            (
                "Increases risk of heart disease, stroke, and diabetes. It indicates underlying insulin resistance and inflammation.",
                "增加心脏病、中风和糖尿病的风险。它表明潜在的胰岛素抵抗和炎症。",
            ),
            (
                "Adopt a Mediterranean diet. Focus on plant-based foods, healthy fats (olive oil), and high fiber.",
                "采取地中海饮食。专注于植物性食物、健康脂肪（橄榄油）和高纤维。",
            ),
            (
                "Waist circumference is a key metric (>40in men, >35in women). Prioritize sleep and stress reduction.",
                "腰围是一个关键指标（男性>40英寸，女性>35英寸）。优先考虑睡眠和减压。",
            ),
        ),
        // B. Cardiovascular
        info(
            "hypertension",
            (
                "Known as the 'Silent Killer', hypertension often has no symptoms while developing over decades. It causes arteries to stiffen and narrow, forcing the heart to work harder.",
                "高血压被称为“沉默的杀手”，通常在数十年间发展而无明显症状。它导致动脉硬化和狭窄，迫使心脏负荷加重。",
            ),
            (
                "Untreated high blood pressure significantly increases the risk of heart failure, aneurysm, kidney disease, and stroke. Crisis levels (>180/120) require immediate emergency care.",
                "未治疗的高血压会显著增加心力衰竭、动脉瘤、肾病和中风的风险。高血压危象（>180/120）需要立即急救。",
            ),
            (
                "Adhere to the DASH diet (Dietary Approaches to Stop Hypertension). Drastically reduce sodium intake (<2,300mg/day). Increase potassium, calcium, and magnesium intake via whole foods.",
                "坚持DASH饮食（停止高血压的饮食方法）。大幅减少钠摄入（每天<2300毫克）。通过天然食物增加钾、钙和镁的摄入。",
            ),
            (
                "Manage stress through breathing or meditation. Limit alcohol consumption. Quit smoking immediately, as it hardens arteries.",
                "通过呼吸或冥想管理压力。限制酒精摄入。立即戒烟，因为吸烟会加速动脉硬化。",
            ),
        ),
        info(
            "high_ldl",
            (
                "LDL (Low-Density Lipoprotein) is 'bad' cholesterol. Excess LDL accumulates in artery walls, forming plaques (atherosclerosis).",
                "LDL（低密度脂蛋白）是“坏”胆固醇。过量的LDL会在动脉壁积聚，形成斑块（动脉粥样硬化）。",
            ),
            (
                "Plaque buildup narrows arteries, reducing blood flow. If a plaque ruptures, it causes a blood clot that can trigger a heart attack or stroke.",
                "斑块积聚使动脉变窄，减少血流。如果斑块破裂，会导致血栓，从而引发心脏病发作或中风。",
            ),
            (
                "Reduce saturated fats (red meat, full-fat dairy). Eliminate trans fats. Increase soluble fiber (oats, beans) which binds to cholesterol.",
                "减少饱和脂肪（红肉、全脂奶）。消除反式脂肪。增加可溶性纤维（燕麦、豆类），有助于结合胆固醇。",
            ),
            (
                "Aerobic exercise helps raise HDL (good) cholesterol. Weight loss and quitting smoking are crucial.",
                "有氧运动有助于提高HDL（好）胆固醇。减肥和戒烟至关重要。",
            ),
        ),
        info(
            "high_triglycerides",
            (
                "Triglycerides are a type of fat (lipid) found in your blood. High levels often accompany high blood sugar and low HDL.",
                "甘油三酯是血液中的一种脂肪（脂质）。高水平通常伴随着高血糖和低HDL。",
            ),
            (
                "Very high levels can cause acute pancreatitis. Contributes to hardening of arteries and heart disease.",
                "极高水平会导致急性胰腺炎。促使动脉硬化和心脏病。",
            ),
            (
                "Avoid sugary foods and refined carbohydrates. Limit alcohol strictly as it rapidly spikes triglycerides.",
                "避免含糖食物和精制碳水化合物。严格限制酒精，因为它会迅速升高甘油三酯。",
            ),
            (
                "Lose weight if needed. Eat fatty fish (omega-3) twice a week.",
                "如果需要，请减肥。每周吃两次富含脂肪的鱼（omega-3）。",
            ),
        ),
        info(
            "cad",
            (
                "Coronary Artery Disease occurs when the major blood vessels supplying the heart become damaged or diseased, usually by plaque buildup.",
                "冠状动脉疾病发生在供应心脏的主要血管受到损伤或病变时，通常由斑块积聚引起。",
            ),
            (
                "The leading cause of death worldwide. Can lead to angina (chest pain), shortness of breath, and heart attack.",
                "全球主要死因。可导致心绞痛（胸痛）、呼吸急促和心脏病发作。",
            ),
            (
                "Adopt a Mediterranean-style diet rich in healthy fats (olive oil, nuts), fish, and vegetables. Low sodium and low sugar.",
                "采取地中海式饮食，富含健康脂肪（橄榄油、坚果）、鱼类和蔬菜。低钠低糖。",
            ),
            (
                "Strict adherence to medications. Cardiac rehabilitation programs are highly recommended after events.",
                "严格遵医嘱服药。发生心脏事件后强烈建议参加心脏康复计划。",
            ),
        ),
        info(
            "heart_failure",
            (
                "The heart is too weak or stiff to pump blood effectively to meet the body's needs. It is a chronic, progressive condition.",
                "心脏太弱或太僵硬，无法有效地泵血以满足身体需求。这是一种慢性、进行性疾病。",
            ),
            (
                "Fluid builds up in lungs (congestion) and legs. Can be life-limiting. Sudden weight gain indicates fluid retention.",
                "液体在肺部（充血）和腿部积聚。可能危及生命。体重突然增加表明体液潴留。",
            ),
            (
                "Sodium restriction is critical (<2,000mg). Often requires fluid restriction (e.g., 1.5-2L/day).",
                "限制钠摄入至关重要（<2000mg）。通常需要限制液体摄入（如每天1.5-2升）。",
            ),
            (
                "Weigh yourself daily to track fluid retention. Elevate legs if swollen. Pace your activities to manage fatigue.",
                "每天称重以监测体液潴留。如果肿胀，抬高腿部。调整活动节奏以管理疲劳。",
            ),
        ),
        // C. Kidney
        info(
            "ckd_1_2",
            (
                "Early stage Chronic Kidney Disease. Mild kidney damage with normal or slightly reduced function (GFR > 60). Often asymptomatic.",
                "早期慢性肾病。轻度肾损伤，功能正常或轻微下降（GFR > 60）。通常无症状。",
            ),
            (
                "Goal is to prevent progression. With care, kidneys can function well for a lifetime.",
                "目标是预防进展。通过护理，肾脏可以终生良好运作。",
            ),
            (
                "Manage blood pressure and blood sugar strictly. Moderate protein intake (don't overload). Restrict salt.",
                "严格管理血压和血糖。适度摄入蛋白质（不要过量）。限制盐分。",
            ),
            (
                "Annual testing of urine (albumin) and blood (creatinine). Stay hydrated unless restricted.",
                "每年进行尿液（白蛋白）和血液（肌酐）检测。除非受限，否则保持水分充足。",
            ),
        ),
        info(
            "ckd_3_5",
            (
                "Chronic Kidney Disease is the gradual loss of kidney function. Stages 3-5 indicate moderate to severe damage where kidneys struggle to filter waste and fluid.",
                "慢性肾病是肾功能的逐渐丧失。3-5期表明中度至重度损伤，肾脏难以过滤废物和液体。",
            ),
            (
                "Advanced stages lead to toxin buildup (uremia), dangerous electrolyte imbalances, fluid retention, and need for dialysis or transplant.",
                "晚期导致毒素积聚（尿毒症）、危险的电解质失衡、体液潴留，并需要透析或移植。",
            ),
            (
                "Diet is complex and stage-dependent. Generally restricts protein, sodium, potassium (oranges, potatoes), and phosphorus (dairy, nuts).",
                "饮食复杂且取决于分期。通常限制蛋白质、钠、钾（橙子、土豆）和磷（乳制品、坚果）。",
            ),
            (
                "Avoid NSAIDs (like ibuprofen). Control blood pressure strictly. Work with a renal dietitian for precise nutrient limits.",
                "避免服用非甾体抗炎药（如布洛芬）。严格控制血压。与肾脏营养师合作制定精确的营养限制。",
            ),
        ),
        info(
            "hyperkalemia",
            (
                "High potassium levels in the blood. Common in kidney disease as kidneys fail to excrete excess potassium.",
                "血液中钾含量过高。常见于肾病，因为肾脏无法排出多余的钾。",
            ),
            (
                "Dangerous because it can cause life-threatening heart arrhythmias or sudden cardiac arrest with few warning signs.",
                "非常危险，因为它可能在几乎没有预警的情况下导致危及生命的心律失常或心脏骤停。",
            ),
            (
                "Avoid high-potassium foods: bananas, potatoes, tomatoes, avocados, citrus. Leach vegetables by boiling them.",
                "避免高钾食物：香蕉、土豆、番茄、牛油果、柑橘。通过煮沸去除蔬菜中的钾。",
            ),
            (
                "Check food labels for potassium chloride (salt substitute). Stick to prescribed diet strictly.",
                "检查食品标签中是否有氯化钾（代盐）。严格遵守处方饮食。",
            ),
        ),
        info(
            "hyperphosphatemia",
            (
                "High levels of phosphorus in the blood, common in later stages of CKD.",
                "血液中磷含量过高，常见于慢性肾病晚期。",
            ),
            (
                "Causes calcium to be pulled from bones, making them weak. Leads to calcification of blood vessels and heart issues.",
                "导致钙从骨骼中流失，使其变弱。导致血管钙化和心脏问题。",
            ),
            (
                "Limit dairy, nuts, seeds, beans, and processed foods with phosphate additives (look for 'phos' on labels).",
                "限制乳制品、坚果、种子、豆类以及含有磷酸盐添加剂的加工食品（查看标签上的“磷”）。",
            ),
            (
                "Take phosphate binders with meals if prescribed. Avoid dark colas.",
                "如果开了处方，请随餐服用磷结合剂。避免深色可乐。",
            ),
        ),
        // D. Gout
        info(
            "gout",
            (
                "Gout is a form of inflammatory arthritis caused by excess uric acid forming sharp crystals in joints. Attacks often occur suddenly, typically at night, starting with the big toe.",
                "痛风是一种炎症性关节炎，由过量的尿酸在关节中形成尖锐结晶引起。发作通常突然发生，多在夜间，常始于大脚趾。",
            ),
            (
                "Frequent flares can cause permanent joint damage and deformity (tophi). High uric acid also risks kidney stones and kidney disease.",
                "频繁发作会导致永久性关节损伤和畸形（痛风石）。高尿酸还带来肾结石和肾病的风险。",
            ),
            (
                "Follow a Low-Purine diet. Avoid organ meats, certain seafood, and sugary sodas. Tart cherry juice may help reduce flares. Stay strictly hydrated.",
                "遵循低嘌呤饮食。避免内脏、特定海鲜和含糖苏打水。酸樱桃汁可能有助于减少发作。严格保持水分充足。",
            ),
            (
                "Drink plenty of water (8-12 cups/day) to flush uric acid. Avoid rapid weight loss as it can trigger attacks. Limit alcohol, especially beer.",
                "每天喝大量水（8-12杯）以排出尿酸。避免快速减肥，因为这可能诱发发作。限制酒精，尤其是啤酒。",
            ),
        ),
        info(
            "hyperuricemia",
            (
                "High uric acid in the blood without symptoms (yet). It is the precursor to gout.",
                "血液中尿酸过高但（暂）无症状。它是痛风的前兆。",
            ),
            (
                "Increases risk of developing gout, kidney stones, and is linked to hypertension and cardiovascular disease.",
                "增加患痛风、肾结石的风险，并与高血压和心血管疾病有关。",
            ),
            (
                "Reduce intake of purine-rich foods (red meat, shellfish). Avoid High Fructose Corn Syrup.",
                "减少富含嘌呤食物（红肉、贝类）的摄入。避免高果葡糖浆。",
            ),
            (
                "Hydration is the simplest and most effective treatment. Limit alcohol.",
                "补充水分是最简单有效的治疗方法。限制酒精。",
            ),
        ),
        // E. Liver
        info(
            "fatty_liver_nafld",
            (
                "Non-Alcoholic Fatty Liver Disease involves fat buildup in the liver not caused by alcohol. It is closely linked to metabolic syndrome, obesity, and diabetes.",
                "非酒精性脂肪肝病是指肝脏内脂肪堆积，非酒精引起。它与代谢综合征、肥胖和糖尿病密切相关。",
            ),
            (
                "Can progress to NASH (inflammation), fibrosis, cirrhosis (permanent scarring), and eventually liver failure or cancer.",
                "可能发展为NASH（炎症）、纤维化、肝硬化（永久性疤痕），最终导致肝衰竭或癌症。",
            ),
            (
                "Eliminate high-fructose corn syrup and added sugars. The liver turns fructose directly into fat. Intermittent fasting can be beneficial.",
                "消除高果葡糖浆和添加糖。肝脏会将果糖直接转化为脂肪。间歇性禁食可能有益。",
            ),
            (
                "Gradual weight loss (7-10% of body weight) helps reverse fat buildup. Prioritize strength training to improve insulin sensitivity.",
                "逐渐减轻体重（体重的7-10%）有助于逆转脂肪堆积。优先进行力量训练以提高胰岛素敏感性。",
            ),
        ),
        info(
            "fatty_liver_afld",
            (
                "Alcoholic Fatty Liver Disease is the earliest stage of alcohol-related liver disease. It occurs when the liver breaks down alcohol, generating toxic substances.",
                "酒精性脂肪肝是酒精相关肝病的早期阶段。它发生在肝脏分解酒精产生有毒物质时。",
            ),
            (
                "Reversible if alcohol is stopped. If drinking continues, it leads to alcoholic hepatitis and cirrhosis.",
                "如果停止饮酒，是可逆的。如果继续饮酒，会导致酒精性肝炎和肝硬化。",
            ),
            (
                "Strict abstinence from alcohol. High protein diet to aid liver regeneration.",
                "严格戒酒。高蛋白饮食有助于肝脏再生。",
            ),
            (
                "Supplements like Vitamin B1 (Thiamine) are often needed. Seek support for cessation.",
                "通常需要补充维生素B1（硫胺素）。寻求戒酒支持。",
            ),
        ),
        info(
            "gallstones",
            (
                "Hardened deposits of digestive fluid (bile) that can form in your gallbladder.",
                "消化液（胆汁）硬化形成的沉积物，可能在胆囊中形成。",
            ),
            (
                "Can block bile ducts causing intense pain (biliary colic), infection, or pancreatitis.",
                "可能阻塞胆管，引起剧烈疼痛（胆绞痛）、感染或胰腺炎。",
            ),
            (
                "Eat a low-fat, high-fiber diet. Avoid rapid weight loss. Avoid fatty/fried meals which trigger contractions.",
                "采取低脂、高纤维饮食。避免快速减肥。避免高脂/油炸餐，这会诱发收缩。",
            ),
            (
                "Eat smaller, more frequent meals. Healthy fats like olive oil in moderation are okay.",
                "少食多餐。适量食用橄榄油等健康脂肪是可以的。",
            ),
        ),
        info(
            "pancreatitis_chronic",
            (
                "Long-standing inflammation of the pancreas that alters the organ's normal structure and functions.",
                "胰腺的长期炎症，改变了器官的正常结构和功能。",
            ),
            (
                "Leads to permanent damage, loss of digestive enzymes (malabsorption), and diabetes.",
                "导致永久性损伤、消化酶缺失（吸收不良）和糖尿病。",
            ),
            (
                "Very low-fat diet (<50g/day). Small, frequent meals. Avoid alcohol and smoking entirely.",
                "极低脂饮食（<50克/天）。少食多餐。完全避免酒精和吸烟。",
            ),
            (
                "May require pancreatic enzyme replacement therapy (PERT) with meals. Stay hydrated.",
                "可能需要随餐进行胰酶替代疗法（PERT）。保持水分充足。",
            ),
        ),
        // F. GI
        info(
            "gerd",
            (
                "Gastroesophageal Reflux Disease is chronic acid reflux where stomach acid flows back into the esophagus, irritating the lining.",
                "胃食管反流病是慢性酸反流，胃酸回流到食管，刺激食管壁。",
            ),
            (
                "Chronic inflammation can lead to esophageal narrowing, ulcers, or Barrett's esophagus (a precancerous condition).",
                "慢性炎症可能导致食管狭窄、溃疡或巴雷特食管（一种癌前病变）。",
            ),
            (
                "Identify and avoid trigger foods (spicy, fatty, caffeine, chocolate, mint). Eat smaller, more frequent meals.",
                "识别并避免诱发食物（辛辣、高脂、咖啡因、巧克力、薄荷）。少食多餐。",
            ),
            (
                "Do not eat within 3 hours of bedtime. Elevate the head of your bed. Losing weight can significantly reduce pressure on the stomach.",
                "睡前3小时内不要进食。抬高床头。减肥可以显著减少对胃的压力。",
            ),
        ),
        info(
            "gastritis",
            (
                "Inflammation of the protective lining of the stomach.",
                "胃部保护性内膜的炎症。",
            ),
            (
                "Can lead to ulcers and increased risk of stomach cancer if untreated (especially if H. pylori related).",
                "如果不治疗（特别是与幽门螺杆菌相关时），可能导致溃疡并增加胃癌风险。",
            ),
            (
                "Avoid irritants: alcohol, caffeine, spicy foods, acidic foods (citrus/tomato). Eat bland, cooked foods.",
                "避免刺激物：酒精、咖啡因、辛辣食物、酸性食物（柑橘/番茄）。吃清淡、煮熟的食物。",
            ),
            (
                "Manage stress. Avoid NSAID pain relievers. Probiotics may help.",
                "管理压力。避免服用非甾体抗炎止痛药。益生菌可能有帮助。",
            ),
        ),
        info(
            "ibs",
            (
                "Irritable Bowel Syndrome is a functional disorder affecting the large intestine. It involves cramping, abdominal pain, bloating, gas, and diarrhea or constipation.",
                "肠易激综合征是一种影响大肠的功能性障碍。症状包括痉挛、腹痛、腹胀、胀气以及腹泻或便秘。",
            ),
            (
                "While painful and disruptive to quality of life, IBS does not cause changes in bowel tissue or increase colorectal cancer risk.",
                "虽然痛苦并影响生活质量，但IBS不会导致肠道组织改变或增加结直肠癌风险。",
            ),
            (
                "The Low FODMAP diet is the gold standard for management. Avoid high-fermentation foods like onions, garlic, wheat, and certain fruits temporarily.",
                "低FODMAP饮食是管理的金标准。暂时避免高发酵食物，如洋葱、大蒜、小麦和某些水果。",
            ),
            (
                "Keep a symptom diary. Stress management is key as the gut-brain axis plays a major role.",
                "记症状日记。压力管理至关重要，因为肠-脑轴起着主要作用。",
            ),
        ),
        info(
            "celiac",
            (
                "An autoimmune disorder where ingesting gluten leads to damage in the small intestine. It is not an allergy, but a genetic condition.",
                "一种自身免疫性疾病，摄入麸质会导致小肠损伤。这不是过敏，而是一种遗传性疾病。",
            ),
            (
                "Damage to intestinal villi prevents nutrient absorption, leading to malnutrition, anemia, osteoporosis, and neurological issues.",
                "肠绒毛损伤阻碍营养吸收，导致营养不良、贫血、骨质疏松和神经系统问题。",
            ),
            (
                "Strict, lifelong avoidance of all gluten (wheat, barley, rye). Even microscopic amounts (crumbs) can cause damage.",
                "终身严格避免所有麸质（小麦、大麦、黑麦）。即使是微量（面包屑）也会造成损伤。",
            ),
            (
                "Watch for hidden gluten in sauces, medications, and lip balms. Use separate cookware to avoid cross-contamination.",
                "注意酱汁、药物和润唇膏中的隐形麸质。使用单独的炊具以避免交叉污染。",
            ),
        ),
        // G. Allergies
        info(
            "allergy_nut",
            (
                "Immune system reaction to tree nuts (almonds, walnuts, cashews, etc.) or peanuts.",
                "免疫系统对树坚果（杏仁、核桃、腰果等）或花生的反应。",
            ),
            (
                "Can range from mild itching to anaphylaxis, a potentially life-threatening reaction causing breathing difficulties and shock.",
                "范围从轻微瘙痒到过敏性休克，这是一种可能危及生命的反应，会导致呼吸困难和休克。",
            ),
            (
                "Strict avoidance. Read labels for 'May contain traces'. Be wary of cross-contamination in bakeries and Asian cuisine.",
                "严格避免。阅读标签上的“可能含有微量”。警惕面包店和亚洲菜肴中的交叉污染。",
            ),
            (
                "Carry an EpiPen at all times. Teach friends/family how to use it.",
                "随身携带EpiPen。教朋友/家人如何使用。",
            ),
        ),
        info(
            "allergy_seafood",
            (
                "Allergy to fish (tuna, salmon) or shellfish (shrimp, lobster, crab). These are distinct allergies but often grouped.",
                "对鱼类（金枪鱼、三文鱼）或贝类（虾、龙虾、蟹）过敏。这些是不同的过敏，但通常被归为一类。",
            ),
            (
                "A common cause of anaphylaxis in adults. Unlike childhood allergies, it is rarely outgrown.",
                "成人过敏性休克的常见原因。与儿童过敏不同，它很少会随年龄增长而消失。",
            ),
            (
                "Avoid all seafood types you react to. Watch for fish sauce in Asian dishes and Caesar salad dressing.",
                "避免所有引起反应的海鲜。注意亚洲菜肴中的鱼露和凯撒沙拉酱。",
            ),
            (
                "Be careful with frying oil in restaurants (cross-contamination). Carry emergency medication.",
                "小心餐馆的油炸用油（交叉污染）。携带急救药物。",
            ),
        ),
        info(
            "lactose_intolerance",
            (
                "Inability to digest lactose, the sugar found in milk, due to a deficiency of the enzyme lactase.",
                "由于缺乏乳糖酶，无法消化牛奶中的糖分——乳糖。",
            ),
            (
                "Causes uncomfortable digestive symptoms (bloating, gas, diarrhea) but is not dangerous or damaging to the gut.",
                "引起不适的消化症状（腹胀、胀气、腹泻），但不危险，也不会损伤肠道。",
            ),
            (
                "Use lactose-free dairy milk or plant milks. Aged cheeses and yogurt are often tolerated due to lower lactose.",
                "使用无乳糖牛奶或植物奶。陈年奶酪和酸奶因乳糖含量较低，通常可以耐受。",
            ),
            (
                "Lactase enzyme supplements can be taken before eating dairy.",
                "在食用乳制品前可以服用乳糖酶补充剂。",
            ),
        ),
        // H. Special
        info(
            "pregnancy",
            (
                "Nutritional needs increase significantly to support fetal growth and maternal health. Immune system changes make food safety critical.",
                "为了支持胎儿生长和母体健康，营养需求显著增加。免疫系统变化使得食品安全至关重要。",
            ),
            (
                "Deficiencies can lead to birth defects or developmental delays. Foodborne illnesses (Listeria, Salmonella) can cause miscarriage.",
                "营养缺乏可能导致出生缺陷或发育迟缓。食源性疾病（李斯特菌、沙门氏菌）可能导致流产。",
            ),
            (
                "Increase Folate, Iron, Calcium, and DHA. Avoid raw meat/fish, unpasteurized dairy, and high-mercury fish.",
                "增加叶酸、铁、钙和DHA的摄入。避免生肉/鱼、未杀菌的乳制品和高汞鱼类。",
            ),
            (
                "Take prenatal vitamins. Stay hydrated. Eat small, frequent meals to manage nausea and heartburn.",
                "服用产前维生素。保持水分充足。少食多餐以控制恶心和胃灼热。",
            ),
        ),
        info(
            "toddler",
            (
                "Rapid growth phase (ages 1-3) requiring high nutrient density. Picky eating is common.",
                "快速生长阶段（1-3岁），需要高营养密度。挑食很常见。",
            ),
            (
                "Choking hazards are a major risk. Iron deficiency anemia is common if milk intake displaces solid food.",
                "窒息是一个主要风险。如果牛奶摄入取代了固体食物，缺铁性贫血很常见。",
            ),
            (
                "Offer a variety of textures and colors. Avoid added sugars and excess salt. Cut round foods (grapes, hot dogs) to prevent choking.",
                "提供多种质地和颜色。避免添加糖和过量的盐。切开圆形食物（葡萄、热狗）以防窒息。",
            ),
            (
                "Limit milk to 2-3 cups/day. Do not force feed; keep mealtimes positive.",
                "限制牛奶每天2-3杯。不要强迫喂食；保持进餐时间愉快。",
            ),
        ),
        // I. Neurological
        info(
            "alzheimers",
            (
                "Alzheimer's is a progressive neurodegenerative disorder that destroys memory and other important mental functions. It is the most common cause of dementia. Beta-amyloid plaques and tau tangles build up in the brain, killing nerve cells.",
                "阿尔茨海默病是一种进行性神经退行性疾病，会破坏记忆和其他重要的心理功能。它是痴呆症最常见的原因。β-淀粉样斑块和tau蛋白缠结在脑中积聚，杀死神经细胞。",
            ),
            (
                "Starts with mild memory loss and progresses to loss of ability to carry on a conversation and respond to the environment. Eventually requires full-time care.",
                "始于轻微的记忆丧失，发展到无法进行对话和对环境做出反应。最终需要全天候护理。",
            ),
            (
                "The MIND Diet (Mediterranean-DASH Intervention for Neurodegenerative Delay) can lower risk by up to 53%. It emphasizes green leafy vegetables, berries, nuts, whole grains, and olive oil while limiting red meat, butter, cheese, and sweets.",
                "MIND饮食（地中海-DASH干预神经退行性延缓饮食）可将风险降低高达53%。它强调绿叶蔬菜、浆果、坚果、全谷物和橄榄油，同时限制红肉、黄油、奶酪和甜食。",
            ),
            (
                "Regular physical exercise, social engagement, and mental stimulation (puzzles, learning new skills) are just as important as diet. Quality sleep helps clear brain toxins.",
                "定期的体育锻炼、社交参与和精神刺激（拼图、学习新技能）与饮食同样重要。优质睡眠有助于清除大脑毒素。",
            ),
        ),
    ])
});
